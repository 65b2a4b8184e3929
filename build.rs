#[cfg(target_os = "windows")]
fn main() {
    use winresource::WindowsResource;

    // Version info only: no icon is shipped for the overtime CLI.
    let mut res = WindowsResource::new();
    res.set("FileDescription", "rOvertime CLI")
        .set("ProductName", "rOvertime")
        .set("OriginalFilename", "rovertime.exe")
        .set("FileVersion", env!("CARGO_PKG_VERSION"))
        .set("ProductVersion", env!("CARGO_PKG_VERSION"))
        .compile()
        .expect("Failed to embed version resource");
}

#[cfg(not(target_os = "windows"))]
fn main() {}
