use std::sync::LazyLock;

use crate::{
    FieldDescriptor, Layout, MemoryBlock, MutableStruct, StructSequenceView, StructType,
    StructView,
};

/// `struct { uint16_t id; double weights[3]; unsigned char tag[5]; }`
struct Sample;

impl Sample {
    const ID: usize = 0;
    const WEIGHTS: usize = 1;
    const TAG: usize = 2;
}

static SAMPLE_LAYOUT: LazyLock<Layout> = LazyLock::new(|| {
    Layout::build(&[
        FieldDescriptor::scalar(2),
        FieldDescriptor::array(8, 3),
        FieldDescriptor::array(1, 5),
    ])
    .unwrap()
});

impl StructType for Sample {
    const NAME: &'static str = "sample";
    const FIELD_NAMES: &'static [&'static str] = &["id", "weights", "tag"];

    fn layout() -> &'static Layout {
        &SAMPLE_LAYOUT
    }
}

impl MutableStruct for Sample {}

fn sample_block(count: usize) -> MemoryBlock<'static> {
    MemoryBlock::allocate_zeroed(count * Sample::sizeof(), Sample::alignof()).unwrap()
}

#[test]
fn test_sample_layout() {
    assert_eq!(Sample::layout().offsetof(Sample::WEIGHTS), 8);
    assert_eq!(Sample::layout().offsetof(Sample::TAG), 32);
    assert_eq!(Sample::sizeof(), 40);
    assert_eq!(Sample::alignof(), 8);
}

#[test]
fn test_generic_accessors() {
    let block = sample_block(1);
    let view = StructView::<Sample>::new(&block).unwrap();

    view.set(Sample::ID, 0xbeefu16).unwrap();
    view.set_at(Sample::WEIGHTS, 2, 0.5f64).unwrap();
    view.array_mut::<u8>(Sample::TAG)
        .unwrap()
        .copy_from_slice(b"rivet")
        .unwrap();

    assert_eq!(view.get::<u16>(Sample::ID).unwrap(), 0xbeef);
    assert_eq!(
        view.array::<f64>(Sample::WEIGHTS).unwrap().to_vec(),
        vec![0.0, 0.0, 0.5]
    );
    assert_eq!(view.get_at::<u8>(Sample::TAG, 4).unwrap(), b't');

    let err = view.get_at::<f64>(Sample::WEIGHTS, 3).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.to_string(), "weights index 3 out of bounds (length 3)");

    // element size must match the field
    assert!(view.get::<u32>(Sample::ID).is_err());
    assert!(view.array::<f32>(Sample::WEIGHTS).is_err());
    assert!(view.get::<u8>(3).unwrap_err().is_out_of_bounds());
}

#[test]
fn test_view_placement_checks() {
    let block = sample_block(2);
    assert!(StructView::<Sample>::at(&block, 40).is_ok());
    assert!(StructView::<Sample>::at(&block, 41).is_err());
    assert!(StructView::<Sample>::at(&block, 4).is_err());
    assert!(StructView::<Sample>::at(&block, usize::MAX).is_err());

    let small = MemoryBlock::allocate_zeroed(39, 8).unwrap();
    assert!(StructView::<Sample>::new(&small).is_err());

    assert!(StructView::<Sample>::at_address(&block, 0).unwrap().is_none());
    let second = StructView::<Sample>::at_address(&block, block.address() + 40)
        .unwrap()
        .unwrap();
    assert_eq!(second.address(), block.address() + 40);
    assert!(StructView::<Sample>::at_address(&block, block.address() + 80).is_err());
    assert!(StructView::<Sample>::at_address(&block, block.address().wrapping_sub(40)).is_err());

    assert!(unsafe { StructView::<Sample>::from_address(0) }.is_none());
}

#[test]
fn test_bytes_round_trip_through_view() {
    let block = sample_block(2);
    let first = StructView::<Sample>::at(&block, 0).unwrap();
    let second = StructView::<Sample>::at(&block, 40).unwrap();
    first.set(Sample::ID, 7u16).unwrap();
    first.set_at(Sample::WEIGHTS, 1, -2.25f64).unwrap();

    second.copy_from_bytes(&first.to_bytes()).unwrap();
    assert_eq!(second.get::<u16>(Sample::ID).unwrap(), 7);
    assert_eq!(second.get_at::<f64>(Sample::WEIGHTS, 1).unwrap(), -2.25);
    assert!(second.copy_from_bytes(&[0; 8]).is_err());
}

#[test]
fn test_sequence_cursor() {
    let block = sample_block(6);
    let mut seq = StructSequenceView::<Sample>::new(&block).unwrap();
    assert_eq!(seq.capacity(), 6);
    assert_eq!(seq.limit(), 6);
    assert_eq!(seq.stride(), 40);

    for i in 0..4u16 {
        seq.get().unwrap().set(Sample::ID, i).unwrap();
    }
    assert_eq!(seq.position(), 4);
    assert_eq!(seq.remaining(), 2);

    seq.flip();
    assert_eq!(seq.limit(), 4);
    assert_eq!(seq.position(), 0);
    let ids: Vec<u16> = seq.iter().map(|v| v.get(Sample::ID).unwrap()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    seq.set_position(1).unwrap();
    seq.mark();
    seq.get().unwrap();
    seq.get().unwrap();
    assert_eq!(seq.position(), 3);
    seq.reset().unwrap();
    assert_eq!(seq.position(), 1);

    seq.set_position(3).unwrap();
    seq.get().unwrap();
    assert!(!seq.has_remaining());
    assert!(seq.get().unwrap_err().is_out_of_bounds());
    assert!(seq.set_position(5).is_err());

    seq.set_limit(2).unwrap();
    assert_eq!(seq.position(), 2);
    seq.reset().unwrap();
    assert_eq!(seq.position(), 1);
    seq.rewind();
    assert!(seq.reset().is_err());
    assert!(seq.set_limit(7).is_err());

    // absolute access ignores the cursor
    assert_eq!(seq.element(3).unwrap().get::<u16>(Sample::ID).unwrap(), 3);
    assert!(seq.element(6).unwrap_err().is_out_of_bounds());

    seq.clear();
    assert_eq!((seq.position(), seq.limit()), (0, 6));
    seq.set_position(2).unwrap();
    seq.rewind();
    assert_eq!(seq.position(), 0);
}

#[test]
fn test_sequence_slices_share_memory() {
    let block = sample_block(5);
    let mut seq = StructSequenceView::<Sample>::new(&block).unwrap();
    seq.set_position(2).unwrap();
    let tail = seq.slice();
    assert_eq!(tail.capacity(), 3);
    assert_eq!(tail.address(), block.address() + 80);

    tail.element(0).unwrap().set(Sample::ID, 42u16).unwrap();
    assert_eq!(seq.current().unwrap().get::<u16>(Sample::ID).unwrap(), 42);

    let middle = seq.slice_range(1..=3).unwrap();
    assert_eq!(middle.capacity(), 3);
    assert_eq!(middle.element(1).unwrap().address(), seq.element(2).unwrap().address());
    assert!(seq.slice_range(2..6).is_err());
    assert_eq!(seq.slice_range(..).unwrap().capacity(), 5);
    assert_eq!(seq.slice_range(5..).unwrap().capacity(), 0);

    let back: Vec<usize> = seq.iter().rev().map(|v| v.address()).collect();
    assert_eq!(back, vec![block.address() + 160, block.address() + 120, block.address() + 80]);
}

#[test]
fn test_sequence_placement() {
    let block = sample_block(3);
    let seq = StructSequenceView::<Sample>::with_count(&block, 40, 2).unwrap();
    assert_eq!(seq.address(), block.address() + 40);
    assert!(StructSequenceView::<Sample>::with_count(&block, 40, 3).is_err());
    assert!(StructSequenceView::<Sample>::with_count(&block, 4, 1).is_err());
    assert!(StructSequenceView::<Sample>::with_count(&block, 120, 0).is_ok());

    let at = StructSequenceView::<Sample>::at_address(&block, block.address() + 80, 1)
        .unwrap()
        .unwrap();
    assert_eq!(at.capacity(), 1);
    assert!(StructSequenceView::<Sample>::at_address(&block, 0, 1).unwrap().is_none());
    assert!(unsafe { StructSequenceView::<Sample>::from_address(0, 4) }.is_none());
}
