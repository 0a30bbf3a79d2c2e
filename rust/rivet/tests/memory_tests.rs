use std::sync::Arc;

use rivet::structs::{GamepadState, Image};
use rivet::{AllocatorConfig, MemoryBlock, OwnedBlock, StructType, StructView};

#[test]
fn test_aliasing_views_observe_writes() {
    let block = MemoryBlock::allocate_zeroed(32, 8).unwrap();
    let a = StructView::<Image>::new(&block).unwrap();
    let b = StructView::<Image>::at_address(&block, block.address())
        .unwrap()
        .unwrap();

    a.set_width(640);
    assert_eq!(b.width(), 640);
    b.set_height(480);
    assert_eq!(a.height(), 480);
    b.set_pixels(0x1000);
    assert_eq!(a.pixels(), 0x1000);
}

#[test]
fn test_uninitialized_allocation_written_before_read() {
    let block = unsafe { MemoryBlock::allocate(24, 8) }.unwrap();
    let image = StructView::<Image>::new(&block).unwrap();
    unsafe { std::ptr::write_bytes(block.as_mut_ptr(), 0, block.len()) };
    assert_eq!(image.width(), 0);
    image.set_width(2).set_height(3);
    assert_eq!(image.pixel_bytes(), 24);
}

#[test]
fn test_allocation_limit() {
    let config = AllocatorConfig::from_json(r#"{ "max_allocation": 64 }"#).unwrap();
    assert!(OwnedBlock::allocate_zeroed_with(64, 4, &config).is_ok());
    let err = OwnedBlock::allocate_zeroed_with(65, 4, &config).unwrap_err();
    assert!(err.is_allocation());
    let err = unsafe { OwnedBlock::allocate_with(1 << 20, 4, &config) }.unwrap_err();
    assert!(err.is_allocation());
}

#[test]
fn test_release_consumes_block() {
    let block = MemoryBlock::allocate_zeroed(40, 4).unwrap();
    {
        let state = StructView::<GamepadState>::new(&block).unwrap();
        assert_eq!(state.button(0).unwrap(), 0);
    }
    block.try_into_owned().unwrap().release();

    let owned = OwnedBlock::allocate_zeroed(16, 16).unwrap();
    owned.release();
}

#[test]
fn test_borrowed_slice_is_left_intact() {
    let mut words = vec![0u64; 8];
    {
        let block = MemoryBlock::borrow_from(bytemuck::cast_slice_mut(&mut words));
        let image = StructView::<Image>::new(&block).unwrap();
        image.set_width(9).set_height(-1);
        assert!(block.try_into_owned().is_err());
    }
    let ints: &[i32] = bytemuck::cast_slice(&words);
    assert_eq!(&ints[..2], &[9, -1]);
    assert!(ints[2..].iter().all(|&v| v == 0));
}

#[test]
fn test_anchored_block_outlives_owner_handle() {
    let shared = OwnedBlock::allocate_zeroed(48, 8).unwrap().into_shared();
    let block = MemoryBlock::anchored(shared.clone()).unwrap();
    assert_eq!(Arc::strong_count(&shared), 2);

    let image = StructView::<Image>::new(&block).unwrap();
    image.set_width(5);
    drop(shared);
    assert_eq!(image.width(), 5);
    assert_eq!(block.copy_to_vec()[..4], 5i32.to_ne_bytes());
}

#[test]
fn test_anchored_blocks_share_bytes_through_views_only() {
    let shared = OwnedBlock::allocate_zeroed(Image::sizeof(), Image::alignof())
        .unwrap()
        .into_shared();
    let mut writer = MemoryBlock::anchored(shared.clone()).unwrap();
    let mut reader = MemoryBlock::anchored(shared).unwrap();
    assert!(writer.as_mut_slice().is_none());
    assert!(reader.as_mut_slice().is_none());

    StructView::<Image>::new(&writer).unwrap().set_width(0x01020304);
    let image = StructView::<Image>::new(&reader).unwrap();
    assert_eq!(image.width(), 0x01020304);
    assert_eq!(reader.copy_to_vec()[..4], 0x01020304i32.to_ne_bytes());
}

#[test]
fn test_concurrent_readers() {
    let mut block = MemoryBlock::allocate_zeroed(40 * 16, 4).unwrap();
    for (i, chunk) in block.as_mut_slice().unwrap().chunks_mut(40).enumerate() {
        chunk[16..20].copy_from_slice(&(i as f32).to_ne_bytes());
    }
    let seq = rivet::StructSequenceView::<GamepadState>::new(&block).unwrap();
    std::thread::scope(|s| {
        for t in 0..4 {
            let seq = seq.clone();
            s.spawn(move || {
                for k in (t..16).step_by(4) {
                    assert_eq!(seq.element(k).unwrap().axis(0).unwrap(), k as f32);
                }
            });
        }
    });
}
