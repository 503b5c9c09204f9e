//! Photo gallery preparation: trimming, de-duplication, and primary
//! selection, independent of rendering.

use std::collections::HashSet;

use crate::model::catalog::PhotoDto;

/// A photo that survived filtering, ready to render
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryPhoto {
    pub id: i32,
    pub url: String,
    pub caption: Option<String>,
    pub taken_date: Option<chrono::NaiveDate>,
    pub telescope: Option<String>,
    pub instrument: Option<String>,
    pub wavelength_filter: Option<String>,
    /// Shown with the primary badge; at most one photo per gallery
    pub display_primary: bool,
}

/// Filter and order an object's photos for display.
///
/// Photos with a blank URL (after trimming) or whose id is in `broken` are
/// dropped. Duplicates are collapsed by trimmed URL plus trimmed, lowercased
/// caption, keeping the first occurrence. The primary badge goes to the first photo
/// flagged `is_primary`, or the first remaining photo when none is flagged.
pub fn visible_photos(photos: &[PhotoDto], broken: &HashSet<i32>) -> Vec<GalleryPhoto> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result: Vec<GalleryPhoto> = Vec::new();
    let mut primary_index: Option<usize> = None;

    for photo in photos {
        let url = photo.url.trim();
        if url.is_empty() || broken.contains(&photo.id) {
            continue;
        }

        let caption_key = photo
            .caption
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let key = format!("{url}|{caption_key}");
        if !seen.insert(key) {
            continue;
        }

        if photo.is_primary && primary_index.is_none() {
            primary_index = Some(result.len());
        }

        result.push(GalleryPhoto {
            id: photo.id,
            url: url.to_string(),
            caption: photo.caption.clone(),
            taken_date: photo.taken_date,
            telescope: photo.telescope.clone(),
            instrument: photo.instrument.clone(),
            wavelength_filter: photo.wavelength_filter.clone(),
            display_primary: false,
        });
    }

    if let Some(index) = primary_index.or(if result.is_empty() { None } else { Some(0) }) {
        result[index].display_primary = true;
    }

    result
}
