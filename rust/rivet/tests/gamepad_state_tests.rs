use rivet::keymap::glfw::{GLFW_PRESS, GLFW_RELEASE};
use rivet::keymap::{GamepadAxis, GamepadButton};
use rivet::structs::GamepadState;
use rivet::{MemoryBlock, OwnedBlock, Ownership, StructSequenceView, StructType, StructView};

/// Writes a native gamepad record into `bytes` the way `glfwGetGamepadState`
/// would: buttons at offset 0, 1 padding byte, axes at offset 16.
fn write_record(bytes: &mut [u8], buttons: &[u8; 15], axes: &[f32; 6]) {
    bytes[..15].copy_from_slice(buttons);
    bytes[15] = 0;
    for (i, axis) in axes.iter().enumerate() {
        bytes[16 + i * 4..20 + i * 4].copy_from_slice(&axis.to_ne_bytes());
    }
}

#[test]
fn test_size_and_alignment() {
    assert_eq!(GamepadState::sizeof(), 40);
    assert_eq!(GamepadState::alignof(), 4);
    let layout = GamepadState::layout();
    assert_eq!(layout.offsetof(GamepadState::BUTTONS), 0);
    assert_eq!(layout.offsetof(GamepadState::AXES), 16);
    assert_eq!(layout.countof(GamepadState::BUTTONS), 15);
    assert_eq!(layout.countof(GamepadState::AXES), 6);
}

#[test]
fn test_axes_round_trip_native_floats() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..100 {
        let mut buttons = [GLFW_RELEASE; 15];
        for b in buttons.iter_mut() {
            *b = if rng.bool() { GLFW_PRESS } else { GLFW_RELEASE };
        }
        let axes: [f32; 6] = std::array::from_fn(|_| rng.f32() * 2.0 - 1.0);

        let mut block = MemoryBlock::allocate_zeroed(GamepadState::sizeof(), 4).unwrap();
        write_record(block.as_mut_slice().unwrap(), &buttons, &axes);

        let state = StructView::<GamepadState>::new(&block).unwrap();
        for (i, &expected) in axes.iter().enumerate() {
            assert_eq!(state.axis(i).unwrap().to_bits(), expected.to_bits());
        }
        assert_eq!(state.buttons().to_vec(), buttons.to_vec());
        for button in GamepadButton::ALL {
            assert_eq!(state.is_pressed(button), buttons[button.index()] == GLFW_PRESS);
        }
    }
}

#[test]
fn test_out_of_range_indices() {
    let block = MemoryBlock::allocate_zeroed(40, 4).unwrap();
    let state = StructView::<GamepadState>::new(&block).unwrap();
    for i in 15..20 {
        let err = state.button(i).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert!(state.buttons().get(i).is_err());
    }
    assert!(state.button(usize::MAX).is_err());
    for i in 6..10 {
        assert!(state.axis(i).unwrap_err().is_out_of_bounds());
    }
    assert_eq!(state.button(14).unwrap(), GLFW_RELEASE);
    assert_eq!(state.axis(5).unwrap(), 0.0);
}

#[test]
fn test_sequence_count_and_addresses() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..50 {
        let len = rng.usize(0..2000);
        let block = MemoryBlock::allocate_zeroed(len, 4).unwrap();
        let seq = StructSequenceView::<GamepadState>::new(&block).unwrap();
        assert_eq!(seq.capacity(), len / 40);
        for k in 0..seq.capacity() {
            assert_eq!(seq.element(k).unwrap().address(), block.address() + 40 * k);
        }
        assert!(seq.element(seq.capacity()).is_err());
    }
}

#[test]
fn test_views_see_native_writes_immediately() {
    let mut words = vec![0u32; 3 * 10];
    let ptr = words.as_mut_ptr().cast::<u8>();
    let block = unsafe { MemoryBlock::borrow(ptr, 3 * 40) }.unwrap();
    assert_eq!(block.ownership(), Ownership::Borrowed);
    let seq = StructSequenceView::<GamepadState>::new(&block).unwrap();
    let second = seq.element(1).unwrap();
    assert!(!second.is_pressed(GamepadButton::Guide));

    // emulate a native callback writing through the raw address
    unsafe {
        ptr.add(40 + GamepadButton::Guide.index()).write(GLFW_PRESS);
        ptr.add(40 + 16 + 4 * GamepadAxis::RightTrigger.index())
            .cast::<f32>()
            .write_unaligned(0.75);
    }
    assert!(second.is_pressed(GamepadButton::Guide));
    assert_eq!(second.axis_value(GamepadAxis::RightTrigger), 0.75);
    assert_eq!(seq.element(2).unwrap().pressed_buttons().count(), 0);
    drop(block);
    assert_eq!(words[12].to_ne_bytes()[0], GLFW_PRESS);
}

#[test]
fn test_owned_block_per_state() {
    let block = OwnedBlock::zeroed_for_struct::<GamepadState>().unwrap();
    assert_eq!(block.len(), 40);
    let block = MemoryBlock::from(block);
    let state = StructView::<GamepadState>::new(&block).unwrap();
    assert_eq!(state.axes().to_vec(), vec![0.0; 6]);
    assert!(OwnedBlock::zeroed_for_structs::<GamepadState>(usize::MAX).is_err());

    let states = OwnedBlock::zeroed_for_structs::<GamepadState>(8).unwrap();
    assert_eq!(states.len(), 320);
}
