use std::env;

const EMBEDDED_VARS: &[&str] = &["WORKFORCE_API_URL"];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=tauri.conf.json");

    // Load .env file during build so the API URL can be baked in
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=BUILD.RS: No .env file loaded ({}). Using system environment variables.", e);
    }

    // Embedded values become the runtime defaults, read back with option_env!()
    for key in EMBEDDED_VARS {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    #[cfg(feature = "desktop")]
    tauri_build::build();
}
