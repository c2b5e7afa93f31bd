use chrono::Utc;

fn main() {
    // Build timestamp reported by /api/health / Būvēšanas laiks
    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=static");
}
