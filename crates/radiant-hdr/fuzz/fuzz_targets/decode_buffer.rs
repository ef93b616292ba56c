#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = radiant_hdr::HdrDecoder::new(data);

    if let Ok(texture) = decoder.decode_texture() {
        let (width, height) = texture.dimensions();
        assert_eq!(texture.mipmaps()[0].data().len(), width * height * 4);
    }
});
