#![no_main]

use codeset_notation::CodeInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(input) = CodeInput::from_json(json) {
        let _ = input.expressions();
        let _ = serde_json::to_string(&input);
    }
});
