//! Copies the trunk output of `../frontend` into `static/` so `main.rs` can
//! embed it. Without a frontend build an empty `static/dist` is embedded.

use std::fs;
use std::io;
use std::path::Path;

use fs_extra::dir::CopyOptions;

const FRONTEND_DIST: &str = "../frontend/dist";
const STATIC_DIR: &str = "static";

fn sync_bundle(dist: &Path, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dist.exists() {
        match fs::remove_dir_all(out) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e.into()),
            _ => {}
        }
        fs::create_dir_all(out)?;
        fs_extra::dir::copy(dist, out, &CopyOptions::new().overwrite(true))?;
    } else {
        println!("cargo:warning=no frontend build at {FRONTEND_DIST}, embedding an empty bundle");
    }
    fs::create_dir_all(out.join("dist"))?;
    Ok(())
}

fn main() {
    if let Err(e) = sync_bundle(Path::new(FRONTEND_DIST), Path::new(STATIC_DIR)) {
        panic!("failed to prepare the embedded widget bundle: {e}");
    }
    println!("cargo:rerun-if-changed={FRONTEND_DIST}");
}
