use std::{
    io::Cursor,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::{
    core::Canvas,
    error::{LifeGridError, LifeGridResult},
};

/// Font and rasterization settings, loadable from a JSON file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RasterOptions {
    /// Family used when a requested family is unavailable.
    pub default_font_family: String,
    /// Load fonts installed on the host.
    pub load_system_fonts: bool,
    /// Extra directories scanned (non-recursively) for `.ttf`, `.otf` and `.ttc` files.
    pub font_dirs: Vec<PathBuf>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            default_font_family: "Inter".to_owned(),
            load_system_fonts: true,
            font_dirs: Vec::new(),
        }
    }
}

impl RasterOptions {
    /// Read options from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> LifeGridResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read raster config '{}'", path.display()))?;
        let options = serde_json::from_str(&text)
            .with_context(|| format!("parse raster config '{}'", path.display()))?;
        Ok(options)
    }
}

/// Turns SVG markup into PNG bytes. Holds the font database so it is built once.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    default_font_family: String,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("faces", &self.fontdb.len())
            .field("default_font_family", &self.default_font_family)
            .finish()
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(&RasterOptions::default())
    }
}

impl Rasterizer {
    /// Build the font database described by `options`.
    #[tracing::instrument(skip_all)]
    pub fn new(options: &RasterOptions) -> Self {
        let mut db = usvg::fontdb::Database::new();
        if options.load_system_fonts {
            db.load_system_fonts();
        }
        for dir in &options.font_dirs {
            load_fonts_from_dir(&mut db, dir);
        }
        tracing::debug!(faces = db.len(), "font database ready");
        Self {
            fontdb: Arc::new(db),
            default_font_family: options.default_font_family.clone(),
        }
    }

    /// Number of loaded font faces.
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Rasterize `svg` at 1:1 scale onto a `canvas`-sized pixmap and encode it as PNG.
    pub fn rasterize_png(&self, svg: &str, canvas: Canvas) -> LifeGridResult<Vec<u8>> {
        let opts = usvg::Options {
            font_family: self.default_font_family.clone(),
            fontdb: Arc::clone(&self.fontdb),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| LifeGridError::render(format!("parse svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
            .ok_or_else(|| LifeGridError::render("failed to allocate pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        encode_png(canvas, rgba)
    }
}

fn encode_png(canvas: Canvas, rgba: Vec<u8>) -> LifeGridResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(canvas.width, canvas.height, rgba)
        .ok_or_else(|| LifeGridError::render("pixel buffer does not match canvas"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping font file");
        }
    }
}

/// Resolve named families first, then generic sans-serif, then any face at all.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
