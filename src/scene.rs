use chrono::NaiveDate;

use crate::request::model::{VisualizationType, WallpaperRequest};

pub(crate) mod caption;
pub(crate) mod document;
pub(crate) mod dots;
pub(crate) mod goal;
pub(crate) mod life;
pub(crate) mod year;

use document::VisualizationDocument;

/// Build the document for `req` as seen on `today` (civil date in the request's zone).
///
/// Pure: identical inputs give identical documents.
#[tracing::instrument(skip(req), fields(kind = req.visualization.code()))]
pub fn generate(req: &WallpaperRequest, today: NaiveDate) -> VisualizationDocument {
    match req.visualization {
        VisualizationType::Year => year::build_year(req, today),
        VisualizationType::Life => life::build_life(req, today),
        VisualizationType::Goal => goal::build_goal(req, today),
    }
}
