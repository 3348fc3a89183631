use std::sync::{Arc, OnceLock};

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use usvg::fontdb::Database;

use crate::SnapshotError;

/// Font database shared by every rasterisation.
///
/// The embedded face is preferred so output does not depend on the host; the
/// generic `sans-serif` family is mapped onto whatever face was loaded, since
/// board labels ask for it by that name.
fn font_database() -> Arc<Database> {
    static FONTS: OnceLock<Arc<Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut fontdb = Database::new();
            if fonts::FONT_BYTES.is_empty() {
                fontdb.load_system_fonts();
            } else {
                fontdb.load_font_data(fonts::FONT_BYTES.to_vec());
            }
            match sans_family(&fontdb) {
                Some(name) => fontdb.set_sans_serif_family(name),
                None => tracing::warn!("no fonts available; labels will not be rendered"),
            }
            Arc::new(fontdb)
        })
        .clone()
}

/// First sans face by family name, else the first face at all.
fn sans_family(fontdb: &Database) -> Option<String> {
    let families: Vec<String> = fontdb
        .faces()
        .filter_map(|face| face.families.first().map(|(n, _)| n.clone()))
        .collect();
    families
        .iter()
        .find(|n| n.contains("Sans") && !n.contains("Mono"))
        .or_else(|| families.first())
        .cloned()
}

/// Render an SVG document into a `width`×`height` pixmap.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<tiny_skia::Pixmap, SnapshotError> {
    let opt = usvg::Options {
        fontdb: font_database(),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| SnapshotError::Svg(format!("{e:?}")))?;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(SnapshotError::PixmapAlloc { width, height })?;
    let mut pm = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pm);
    Ok(pixmap)
}

/// RGBA -> PNG bytes. Filter and compression are pinned so identical pixels
/// always give identical bytes.
pub fn encode_rgba_to_png_bytes(
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, width, height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        enc.set_filter(FilterType::NoFilter);
        enc.set_compression(Compression::Default);
        let mut writer = enc.write_header()?;
        writer.write_image_data(rgba)?;
    }
    Ok(buf)
}

pub fn encode_pixmap(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, png::EncodingError> {
    encode_rgba_to_png_bytes(pixmap.width(), pixmap.height(), pixmap.data())
}

#[cfg(test)]
#[path = "raster_test.rs"]
mod tests;
