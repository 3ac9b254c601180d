use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright year, fixed at build so SSR and hydration agree
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
