use std::env;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use zip::ZipArchive;

const FONT_FILE: &str = "board-font.ttf";
const ZIP_URL: &str = concat!(
    "https://github.com/dejavu-fonts/dejavu-fonts/releases/download/",
    "version_2_37/dejavu-fonts-ttf-2.37.zip"
);
const ZIP_MEMBER: &str = "ttf/DejaVuSans.ttf";
const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FONT_TTF");

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        println!("cargo:warning=OUT_DIR not set");
        return;
    };
    let target = out_dir.join(FONT_FILE);
    if fs::metadata(&target).is_ok_and(|m| m.len() > 0) {
        return;
    }

    // Explicit override first, then a font already on the machine, then the network.
    let bytes = env::var_os("FONT_TTF")
        .and_then(|p| fs::read(p).ok())
        .or_else(|| SYSTEM_CANDIDATES.iter().find_map(|p| fs::read(p).ok()))
        .or_else(|| download(&out_dir));

    let bytes = match bytes {
        Some(b) => b,
        None => {
            println!("cargo:warning=no font found; set FONT_TTF or allow network");
            println!("cargo:warning=PNG labels fall back to system fonts");
            Vec::new()
        }
    };
    if let Err(e) = fs::write(&target, &bytes) {
        panic!("failed to write {}: {e}", target.display());
    }
}

fn download(out_dir: &Path) -> Option<Vec<u8>> {
    let zip_path = out_dir.join("dejavu-fonts.zip");
    let zip_arg = zip_path.to_str()?;
    let fetched = Command::new("curl")
        .args(["-L", "-f", "-s", "-o", zip_arg, ZIP_URL])
        .status()
        .is_ok_and(|st| st.success())
        || Command::new("wget")
            .args(["-q", "-O", zip_arg, ZIP_URL])
            .status()
            .is_ok_and(|st| st.success());
    if !fetched {
        return None;
    }

    let data = fs::read(&zip_path).ok()?;
    let mut zip = ZipArchive::new(Cursor::new(data)).ok()?;
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).ok()?;
        if file.name().ends_with(ZIP_MEMBER) {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf).ok()?;
            return Some(buf);
        }
    }
    None
}
