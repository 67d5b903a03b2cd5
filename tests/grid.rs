use bluenoise_swap::*;

fn fixture() -> ValueGrid {
    ValueGrid::from_values(2, vec![10, 20, 30, 40]).unwrap()
}

#[test]
fn test_export_mono_copies_verbatim() {
    let grid = fixture();
    // Stale content must be replaced, not appended to.
    let mut buffer = vec![0xAA; 17];

    grid.export_mono(&mut buffer);

    assert_eq!(buffer, vec![10, 20, 30, 40]);
}

#[test]
fn test_export_rgba_is_not_normalized() {
    let grid = fixture();
    let mut buffer = vec![[0.5; 4]; 1];

    grid.export_rgba(&mut buffer);

    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer[0], [10.0, 10.0, 10.0, 1.0]);
    assert_eq!(buffer[3], [40.0, 40.0, 40.0, 1.0]);
}

#[test]
fn test_random_fill_has_duplicates_and_full_range() {
    let mut rng = Xoshiro128StarStar::from_seed_u64(99);
    let grid = ValueGrid::random(64, &mut rng).unwrap();
    let histogram = grid.histogram();

    assert_eq!(histogram.iter().sum::<usize>(), 64 * 64);
    // 4096 draws over 256 values: duplicates are certain.
    assert!(histogram.iter().any(|&count| count > 1));
    assert!(histogram.iter().filter(|&&count| count > 0).count() > 200);
}

#[test]
fn test_index_errors_report_length() {
    let mut grid = fixture();

    let err = grid.swap(1, 7).unwrap_err();
    assert!(matches!(err, MaskError::IndexOutOfRange { index: 7, len: 4 }));
    assert_eq!(err.to_string(), "index 7 out of range for grid of 4 cells");

    grid.set(3, 1).unwrap();
    assert_eq!(grid.get(3).unwrap(), 1);
}

#[cfg(feature = "image")]
mod image_tests {
    use super::*;

    #[test]
    fn test_luma_image_matches_mono_export() {
        let grid = fixture();
        let image = grid.to_luma8();

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0).0, [20]);
        assert_eq!(image.get_pixel(0, 1).0, [30]);

        let mut mono = Vec::new();
        grid.export_mono(&mut mono);
        assert_eq!(image.into_raw(), mono);
    }

    #[test]
    fn test_rgba32f_image_keeps_raw_values() {
        let image = fixture().to_rgba32f();
        assert_eq!(image.get_pixel(1, 1).0, [40.0, 40.0, 40.0, 1.0]);
    }

    #[test]
    fn test_save_png_round_trip() {
        let mut noise = BlueNoise::generate(
            MaskConfig::default().with_size(16).with_seed(3),
        )
        .unwrap();
        noise.run(2);

        let path = std::env::temp_dir()
            .join(format!("bluenoise-swap-{}.png", std::process::id()));
        noise.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_luma8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (16, 16));
        assert_eq!(loaded.as_raw().as_slice(), noise.grid().values());
    }

    #[test]
    fn test_save_empty_grid_fails() {
        let noise = BlueNoise::new(MaskConfig::default()).unwrap();
        let path = std::env::temp_dir().join("bluenoise-swap-empty.png");

        assert!(matches!(
            noise.save_png(&path),
            Err(MaskError::InvalidArgument(_))
        ));
    }
}
