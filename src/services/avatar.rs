//! Avatar loading: decode the configured image into terminal cell art.
//!
//! Each terminal cell shows two vertically stacked pixels via the upper
//! half block, foreground = top pixel, background = bottom pixel. Any
//! load or decode failure is handled locally by the caller falling back
//! to the initials badge; nothing propagates.

use image::imageops::FilterType;
use image::GenericImageView;
use ratatui::style::Color;
use std::path::Path;

/// Cell width of the rendered avatar
pub const AVATAR_CELLS: u32 = 16;

/// Cell height of the rendered avatar (two pixels per row)
pub const AVATAR_ROWS: u32 = 8;

/// Avatar image resolved to terminal cells
#[derive(Debug, Clone)]
pub struct AvatarArt {
    /// rows[y][x] = (top pixel, bottom pixel)
    pub rows: Vec<Vec<(Color, Color)>>,
}

impl AvatarArt {
    pub fn width(&self) -> u16 {
        self.rows.first().map_or(0, |r| r.len() as u16)
    }

    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }
}

/// Load and downsample the avatar. Returns `None` on any failure; the
/// caller renders the initials badge instead.
pub fn load_avatar(path: &Path) -> Option<AvatarArt> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            tracing::debug!("avatar unavailable at {:?}: {}", path, e);
            return None;
        }
    };

    // Two pixels of height per cell row
    let resized = img.resize_exact(AVATAR_CELLS, AVATAR_ROWS * 2, FilterType::Triangle);
    let rgba = resized.to_rgba8();
    let (width, height) = resized.dimensions();

    let mut rows = Vec::with_capacity((height / 2) as usize);
    for cell_y in 0..height / 2 {
        let mut row = Vec::with_capacity(width as usize);
        for x in 0..width {
            let top = rgba.get_pixel(x, cell_y * 2);
            let bottom = rgba.get_pixel(x, cell_y * 2 + 1);
            row.push((
                Color::Rgb(top[0], top[1], top[2]),
                Color::Rgb(bottom[0], bottom[1], bottom[2]),
            ));
        }
        rows.push(row);
    }

    Some(AvatarArt { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_missing_file_falls_back() {
        assert!(load_avatar(Path::new("/nonexistent/avatar.jpeg")).is_none());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.jpeg");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(load_avatar(&path).is_none());
    }

    #[test]
    fn test_valid_image_resolves_to_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        let mut img = RgbImage::new(64, 64);
        for pixel in img.pixels_mut() {
            *pixel = Rgb([120, 80, 200]);
        }
        img.save(&path).unwrap();

        let art = load_avatar(&path).expect("valid image should load");
        assert_eq!(art.width() as u32, AVATAR_CELLS);
        assert_eq!(art.height() as u32, AVATAR_ROWS);
        assert_eq!(art.rows[0][0].0, Color::Rgb(120, 80, 200));
    }
}
