// Integration tests for `Handle`, the create-once session slot.

use lz4stream::stream::{Error, Handle, StreamDecoder, StreamEncoder, Variant};

#[test]
fn lifecycle() {
    let mut slot: Handle<StreamEncoder> = Handle::default();
    assert!(!slot.is_initialized());
    assert!(matches!(slot.get_mut(), Err(Error::UninitializedSession)));

    slot.init(StreamEncoder::new(1024, Variant::Fast, None).unwrap())
        .unwrap();
    assert!(slot.is_initialized());
    let again = slot.init(StreamEncoder::new(1024, Variant::Fast, None).unwrap());
    assert!(matches!(again, Err(Error::AlreadyInitialized)));

    let packed = slot.get_mut().unwrap().update(b"via handle").unwrap();
    let mut dec_slot = Handle::empty();
    dec_slot.init(StreamDecoder::new(None)).unwrap();
    assert_eq!(dec_slot.get_mut().unwrap().update(&packed, 64).unwrap(), b"via handle");

    assert!(slot.take().is_some());
    assert!(!slot.is_initialized());
}

#[test]
fn error_names_are_stable() {
    assert_eq!(Error::UninitializedSession.error_name(), "ERROR_uninitializedSession");
    assert_eq!(Error::AlreadyInitialized.error_name(), "ERROR_alreadyInitialized");
    assert!(!Error::AlreadyInitialized.to_string().is_empty());
}
