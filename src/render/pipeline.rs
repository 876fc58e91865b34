use chrono::{DateTime, Utc};

use crate::{
    calendar::civil::civil_date_in_zone,
    foundation::{error::LifeGridResult, math::fingerprint_hex},
    render::{raster::Rasterizer, svg::to_svg},
    request::{
        cache::{cache_control, cache_key},
        model::{OutputFormat, VisualizationType, WallpaperRequest},
        validate::validate_params,
    },
    scene::generate,
};

/// Encoded wallpaper plus the metadata an HTTP layer needs to serve it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedImage {
    /// Which visualization produced the image.
    pub visualization: VisualizationType,
    /// Encoding of `body`.
    pub format: OutputFormat,
    /// Encoded bytes (UTF-8 markup for SVG).
    pub body: Vec<u8>,
    /// Shared-cache key; `None` for personal visualizations.
    pub cache_key: Option<String>,
    /// Quoted strong validator derived from `body`.
    pub etag: String,
}

impl RenderedImage {
    /// MIME type of `body`.
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }

    /// `Cache-Control` value for this image.
    pub fn cache_control(&self) -> &'static str {
        cache_control(self.visualization)
    }
}

/// Validate raw query parameters, then render.
///
/// Validation failures come back as [`LifeGridError::Validation`](crate::LifeGridError) and
/// nothing is drawn.
#[tracing::instrument(skip_all)]
pub fn render_wallpaper<I, K, V>(
    params: I,
    now: DateTime<Utc>,
    rasterizer: &Rasterizer,
) -> LifeGridResult<RenderedImage>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let req = validate_params(params).inspect_err(|errors| {
        tracing::info!(issues = errors.issues.len(), %errors, "request rejected");
    })?;
    render_request(&req, now, rasterizer)
}

/// Render an already validated request as of `now`.
#[tracing::instrument(
    skip(req, rasterizer),
    fields(kind = req.visualization.code(), format = ?req.format)
)]
pub fn render_request(
    req: &WallpaperRequest,
    now: DateTime<Utc>,
    rasterizer: &Rasterizer,
) -> LifeGridResult<RenderedImage> {
    let today = civil_date_in_zone(req.timezone, now);
    let doc = generate(req, today);
    let svg = to_svg(&doc)?;
    let body = match req.format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Png => rasterizer
            .rasterize_png(&svg, doc.canvas())
            .inspect_err(|e| tracing::error!(error = %e, "rasterization failed"))?,
    };
    let etag = format!("\"{}\"", fingerprint_hex(&body));
    tracing::debug!(%today, bytes = body.len(), %etag, "wallpaper rendered");

    Ok(RenderedImage {
        visualization: req.visualization,
        format: req.format,
        cache_key: cache_key(req, today),
        etag,
        body,
    })
}
