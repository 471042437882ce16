#![no_main]

use libfuzzer_sys::fuzz_target;
use site_health::application::{CheckOptions, CheckUseCase, InfoOptions, InfoUseCase};
use site_health::HostSnapshot;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and everything downstream of a parsed snapshot must not panic
        if let Ok(snapshot) = HostSnapshot::from_json(content, "fuzz") {
            let _ = CheckUseCase::new(&snapshot, CheckOptions::default()).execute();
            let _ = InfoUseCase::new(&snapshot).execute(&InfoOptions {
                all: true,
                include_private: true,
                ..InfoOptions::default()
            });
        }
    }
});
