use std::env;

/// Bake the Supabase credentials into the binary.
///
/// The web app has no runtime environment, so the URL and anon key are read
/// at build time. When unset, placeholders are baked in and the app reports
/// a configuration error on load instead of failing the build.
fn main() {
    for (var, baked, placeholder) in [
        ("SUPABASE_URL", "SAMU_SUPABASE_URL", "SUPABASE_URL_PLACEHOLDER"),
        ("SUPABASE_ANON_KEY", "SAMU_SUPABASE_ANON_KEY", "SUPABASE_ANON_KEY_PLACEHOLDER"),
    ] {
        println!("cargo:rerun-if-env-changed={var}");
        let value = match env::var(var) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => {
                println!("cargo:warning={var} is not set, using placeholder; the dashboard will not load data");
                placeholder.to_string()
            }
        };
        println!("cargo:rustc-env={baked}={value}");
    }
}
