#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp24::{DecodeRequest, ImageInfo, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };

    // Must never panic
    let _ = ImageInfo::from_bytes(data);
    let _ = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
