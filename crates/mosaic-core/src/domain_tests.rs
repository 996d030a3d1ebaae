//! Domain-critical regression tests for mosaic-core.
//!
//! Each test names the class of bug it guards against. Unit tests next to
//! each module cover the happy paths.

#[cfg(test)]
mod domain_tests {
    use std::collections::HashSet;

    use crate::api::{MosaicError, Pixelator};
    use crate::color::{HexColor, Rgb};
    use crate::output::flatten;
    use crate::palette::{closest_color, Palette, PaletteEntry};
    use crate::preprocess::{fit_within, PixelBuffer};
    use crate::reduce::reduce;

    /// Deterministic pseudo-random RGBA buffer (xorshift, no dependency).
    fn noise(width: u32, height: u32, seed: u32) -> PixelBuffer {
        let mut state = seed.max(1);
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            for channel in 0..4 {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                data.push(if channel == 3 { 255 } else { (state >> 24) as u8 });
            }
        }
        PixelBuffer::new(width, height, data).unwrap()
    }

    // ========================================================================
    // GAP 1: Quadrant averaging -- blocks must line up with the pixel grid
    // ========================================================================

    /// If this breaks, it means: the reducer reads blocks at the wrong
    /// offsets (transposed rows and columns, or a stride off by one) so
    /// solid quadrants bleed into each other.
    #[test]
    fn test_four_solid_quadrants() {
        let red = [255, 0, 0, 255];
        let green = [0, 255, 0, 255];
        let blue = [0, 0, 255, 255];
        let white = [255, 255, 255, 255];

        let mut data = Vec::new();
        for y in 0..4 {
            for x in 0..4 {
                let px = match (y < 2, x < 2) {
                    (true, true) => red,
                    (true, false) => green,
                    (false, true) => blue,
                    (false, false) => white,
                };
                data.extend_from_slice(&px);
            }
        }
        let buffer = PixelBuffer::new(4, 4, data).unwrap();
        let grid = reduce(&buffer, 2).unwrap();

        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.color(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(grid.color(0, 1), Some(Rgb::new(0, 255, 0)));
        assert_eq!(grid.color(1, 0), Some(Rgb::new(0, 0, 255)));
        assert_eq!(grid.color(1, 1), Some(Rgb::new(255, 255, 255)));
    }

    // ========================================================================
    // GAP 2: Running mean drift
    // ========================================================================

    /// If this breaks, it means: the incremental mean update lost precision
    /// (f32 accumulation, integer division, or an off-by-one count) and no
    /// longer agrees with the plain arithmetic mean of the block.
    #[test]
    fn test_running_mean_matches_arithmetic_mean() {
        let buffer = noise(60, 45, 0x5eed);

        for d in [1u32, 2, 3, 7, 15] {
            let grid = reduce(&buffer, d).unwrap();
            for row in 0..grid.nb_rows() {
                for col in 0..grid.nb_cols() {
                    let mut sums = [0u64; 3];
                    for y in row as u32 * d..(row as u32 + 1) * d {
                        for x in col as u32 * d..(col as u32 + 1) * d {
                            let px = buffer.pixel(x, y).unwrap();
                            for c in 0..3 {
                                sums[c] += px[c] as u64;
                            }
                        }
                    }
                    let n = (d * d) as f64;
                    let means = grid.cell(row, col).unwrap().means();
                    for c in 0..3 {
                        let expected = sums[c] as f64 / n;
                        assert!(
                            (means[c] - expected).abs() <= 1e-9 * expected.max(1.0),
                            "REGRESSION: d={d} cell ({row},{col}) channel {c}: \
                             running mean {} vs arithmetic mean {expected}",
                            means[c]
                        );
                    }
                }
            }
        }
    }

    // ========================================================================
    // GAP 3: Grid geometry
    // ========================================================================

    /// If this breaks, it means: grid sizing rounds instead of flooring, or
    /// swaps width and height.
    #[test]
    fn test_grid_dimensions_are_floored_quotients() {
        let buffer = noise(37, 23, 7);
        for d in 1..=40u32 {
            let grid = reduce(&buffer, d).unwrap();
            assert_eq!(grid.nb_rows(), (23 / d) as usize, "d={d}");
            assert_eq!(grid.nb_cols(), (37 / d) as usize, "d={d}");
        }
    }

    /// If this breaks, it means: diameter 1 no longer reproduces the source
    /// exactly, which points at a rounding bug in the mean.
    #[test]
    fn test_diameter_one_reproduces_source() {
        let buffer = noise(19, 11, 42);
        let grid = reduce(&buffer, 1).unwrap();

        assert_eq!(grid.dimensions(), (11, 19));
        for (i, px) in buffer.data().chunks_exact(4).enumerate() {
            let (row, col) = (i / 19, i % 19);
            assert_eq!(grid.color(row, col), Some(Rgb::new(px[0], px[1], px[2])));
        }
    }

    /// If this breaks, it means: a zero diameter reached the division in the
    /// reducer instead of being rejected up front.
    #[test]
    fn test_zero_diameter_rejected_everywhere() {
        let buffer = noise(8, 8, 3);
        assert_eq!(
            reduce(&buffer, 0),
            Err(MosaicError::InvalidDimension {
                what: "diameter",
                value: 0
            })
        );
        assert!(Pixelator::new(0).pixelate(&buffer).is_err());
    }

    // ========================================================================
    // GAP 4: Flattening
    // ========================================================================

    /// If this breaks, it means: flatten skips, repeats or misnumbers cells.
    #[test]
    fn test_flatten_covers_every_cell_once() {
        let buffer = noise(50, 31, 11);

        for d in [1u32, 4, 6, 31] {
            let grid = reduce(&buffer, d).unwrap();
            let tiles = flatten(&grid);

            assert_eq!(tiles.len(), grid.nb_rows() * grid.nb_cols());
            let mut seen = HashSet::new();
            for (i, tile) in tiles.iter().enumerate() {
                assert!(tile.row_index < grid.nb_rows());
                assert!(tile.col_index < grid.nb_cols());
                assert_eq!(tile.row_index * grid.nb_cols() + tile.col_index, i);
                assert_eq!(tile.diameter, d);
                assert_eq!(Some(tile.color), grid.hex(tile.row_index, tile.col_index));
                assert!(seen.insert((tile.row_index, tile.col_index)));
            }
        }
    }

    // ========================================================================
    // GAP 5: Color codec and palette policy
    // ========================================================================

    /// If this breaks, it means: hex encoding dropped zero padding or
    /// changed case, so catalog lookups by string stop matching.
    #[test]
    fn test_hex_round_trip_law() {
        let buffer = noise(16, 16, 99);
        for px in buffer.data().chunks_exact(4) {
            let s = format!("#{:02x}{:02x}{:02x}", px[0], px[1], px[2]);
            let hex: HexColor = s.parse().unwrap();
            assert_eq!(hex.to_string(), s);
            assert_eq!(hex.to_rgb().to_hex(), hex);
        }
    }

    /// If this breaks, it means: an exact catalog color is no longer its own
    /// best match.
    #[test]
    fn test_exact_palette_color_matches_itself() {
        let catalog = realistic_catalog();
        for entry in catalog.entries() {
            let m = catalog.closest(entry.hex.to_rgb()).unwrap();
            assert_eq!(m.distance, 0.0);
            assert_eq!(m.entry.hex, entry.hex);
        }
    }

    /// If this breaks, it means: the matcher switched to `<=` (last entry
    /// wins) or sorts the palette, changing output for tied colors.
    #[test]
    fn test_ties_resolve_to_first_entry() {
        let query = "#646464";
        let first = PaletteEntry::new("First", "#6e6464".parse().unwrap());
        let second = PaletteEntry::new("Second", "#5a6464".parse().unwrap());

        let forward = [first.clone(), second.clone()];
        let backward = [second.clone(), first.clone()];

        assert_eq!(closest_color(query, &forward).unwrap(), Some(first.hex));
        assert_eq!(closest_color(query, &backward).unwrap(), Some(second.hex));
    }

    /// If this breaks, it means: the end-to-end pipeline started emitting
    /// colors that are not in the catalog.
    #[test]
    fn test_snapped_mosaic_only_uses_catalog_colors() {
        let catalog = realistic_catalog();
        let allowed: HashSet<HexColor> = catalog.entries().iter().map(|e| e.hex).collect();

        let mosaic = Pixelator::new(4)
            .bounds(40, 40)
            .palette(catalog)
            .pixelate(&noise(90, 60, 1234))
            .unwrap();

        assert_eq!((mosaic.width(), mosaic.height()), (40, 26));
        assert_eq!(mosaic.grid_dimensions(), (6, 10));
        assert!(mosaic.tiles().iter().all(|t| allowed.contains(&t.color)));
    }

    // ========================================================================
    // GAP 6: Resize planning
    // ========================================================================

    /// If this breaks, it means: the planner stretches the image instead of
    /// keeping its aspect ratio inside the box.
    #[test]
    fn test_fit_within_keeps_aspect_ratio() {
        assert_eq!(fit_within(1000, 500, 500, 500).unwrap(), (500, 250));
        assert_eq!(fit_within(500, 1000, 500, 500).unwrap(), (250, 500));

        for (w, h) in [(640, 480), (1024, 768), (300, 900), (17, 5)] {
            let (tw, th) = fit_within(w, h, 500, 500).unwrap();
            assert!(tw <= 500 && th <= 500);
            let source = w as f64 / h as f64;
            let target = tw as f64 / th as f64;
            assert!(
                (source - target).abs() / source < 0.02,
                "{w}x{h} -> {tw}x{th} changed the aspect ratio"
            );
        }
    }

    // ========================================================================
    // GAP 7: Downscale averaging -- resizing must not alias fine detail
    // ========================================================================

    /// If this breaks, it means: the resampler picks individual source
    /// columns on a large downscale instead of averaging them, so a fine
    /// stripe pattern turns a mid-gray photo into solid white or black.
    #[test]
    fn test_large_downscale_preserves_area_mean() {
        let size = 1500u32;
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for _ in 0..size {
            for x in 0..size {
                let v = if x % 3 == 0 { 255 } else { 0 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let image = PixelBuffer::new(size, size, data).unwrap();

        let grid = Pixelator::new(5).bounds(500, 500).grid(&image).unwrap();
        assert_eq!(grid.dimensions(), (100, 100));
        assert_eq!(grid.hex(50, 50), Some("#555555".parse().unwrap()));

        for row in 0..grid.nb_rows() {
            for col in 0..grid.nb_cols() {
                let c = grid.color(row, col).unwrap();
                assert!(
                    (75..=95).contains(&c.r) && c.r == c.g && c.g == c.b,
                    "cell ({row}, {col}) = {c:?}, expected close to #555555"
                );
            }
        }
    }

    /// A small round-tile catalog with realistic solid colors.
    fn realistic_catalog() -> Palette {
        Palette::new(vec![
            PaletteEntry::new("White", "#ffffff".parse().unwrap()),
            PaletteEntry::new("Black", "#05131d".parse().unwrap()),
            PaletteEntry::new("Red", "#c91a09".parse().unwrap()),
            PaletteEntry::new("Blue", "#0055bf".parse().unwrap()),
            PaletteEntry::new("Yellow", "#f2cd37".parse().unwrap()),
            PaletteEntry::new("Green", "#237841".parse().unwrap()),
            PaletteEntry::new("Light Bluish Gray", "#a0a5a9".parse().unwrap()),
            PaletteEntry::new("Dark Bluish Gray", "#6c6e68".parse().unwrap()),
        ])
    }
}
