mod common;

use common::synthetic_image::{
    line_u8, noisy_line_u8, replicate_channels, rotate_cw_u8, rotate_half_turn_u8,
};
use fast_hough::angle::quarter_turn_difference;
use fast_hough::image::io::{load_image, save_accumulator};
use fast_hough::image::ImageU8;
use fast_hough::transform::{
    normalize, AngleSelection, CellSupport, ChannelPolicy, EstimatorParams, Normalization,
};
use fast_hough::{FastHoughTransformer, TransformParams};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn slant(size: usize, data: &[u8]) -> i32 {
    FastHoughTransformer::new(ImageU8::gray(size, size, data))
        .expect("valid image")
        .apply()
}

#[test]
fn horizontal_line_on_scanned_page_is_level() {
    init_logger();
    let img = noisy_line_u8(64, 0.0);
    assert_eq!(slant(64, &img), 0);
}

#[test]
fn clean_horizontal_line_is_level() {
    init_logger();
    let img = line_u8(64, 0.0);
    assert!(img[32 * 64..33 * 64].iter().all(|&v| v == 255));

    let fht = FastHoughTransformer::new(ImageU8::gray(64, 64, &img)).unwrap();
    assert_eq!(fht.apply(), 0);
    assert_eq!(fht.estimate().selection, AngleSelection::Ridge);

    let params = TransformParams {
        estimator: EstimatorParams {
            cell_support: CellSupport::All,
            ..Default::default()
        },
        ..Default::default()
    };
    let fht = FastHoughTransformer::with_params(ImageU8::gray(64, 64, &img), params).unwrap();
    assert_eq!(fht.apply(), 0);
}

#[test]
fn clean_line_angles_are_recovered_within_one_degree() {
    init_logger();
    for size in [64usize, 128] {
        for angle in [-40, -30, -20, -10, -5, 5, 10, 20, 30, 40] {
            let img = line_u8(size, f64::from(angle));
            let found = slant(size, &img);
            assert!(
                (found - angle).abs() <= 1,
                "{size}px line at {angle}° detected as {found}°"
            );
        }
    }
}

#[test]
fn noisy_line_angles_are_recovered_within_one_degree() {
    init_logger();
    let size = 128;
    for angle in [-40, -32, -24, -16, -8, 12, 20, 28, 36] {
        let img = noisy_line_u8(size, f64::from(angle));
        let found = slant(size, &img);
        assert!(
            (found - angle).abs() <= 1,
            "line at {angle}° detected as {found}°"
        );
    }
}

#[test]
fn half_turn_rotation_keeps_the_angle() {
    init_logger();
    let size = 128;
    for angle in [-40, -24, 4, 28, 40] {
        let img = noisy_line_u8(size, f64::from(angle));
        let a = slant(size, &img);
        let b = slant(size, &rotate_half_turn_u8(&img));
        assert!(
            quarter_turn_difference(f64::from(a), f64::from(b)) <= 1.0,
            "{angle}°: {a}° vs {b}° after rotating by 180°"
        );
    }
}

#[test]
fn quarter_turn_rotation_moves_the_angle_to_the_boundary() {
    init_logger();
    // a quarter turn maps θ to θ ± 90°, which folds onto the ±45° edge of the domain
    for size in [64usize, 128] {
        for angle in [-20, -10, -5, 5, 10, 20] {
            let img = line_u8(size, f64::from(angle));
            let found = slant(size, &rotate_cw_u8(&img, size));
            let from_edge = quarter_turn_difference(f64::from(found), -45.0);
            assert!(
                from_edge <= 6.0,
                "{size}px line at {angle}° rotated by 90° detected as {found}°"
            );
        }
    }
    let level = line_u8(64, 0.0);
    assert_eq!(slant(64, &rotate_cw_u8(&level, 64)), -45);
}

#[test]
fn vertical_line_reports_the_boundary() {
    init_logger();
    let size = 64;
    let mut img = vec![0u8; size * size];
    for y in 0..size {
        img[y * size + 32] = 255;
    }
    let fht = FastHoughTransformer::new(ImageU8::gray(size, size, &img)).unwrap();
    let estimate = fht.estimate();
    assert!(!estimate.profile.is_empty());
    assert!(estimate.profile.iter().all(|s| s.variance == 0.0));
    assert_eq!(estimate.selection, AngleSelection::Boundary);
    assert_eq!(estimate.angle_deg, -45);
    assert_eq!(fht.apply(), -45);
}

#[test]
fn all_zero_image_is_well_defined() {
    init_logger();
    let img = vec![0u8; 64 * 64];
    let fht = FastHoughTransformer::new(ImageU8::gray(64, 64, &img)).unwrap();
    assert_eq!(fht.normalization(), Normalization::Flat { value: 0 });
    assert!(fht.accumulator().data().iter().all(|&v| v == 0));
    assert_eq!(fht.apply(), 0);
}

#[test]
fn normalized_accumulator_is_stable_under_renormalization() {
    let img = noisy_line_u8(64, 10.0);
    let fht = FastHoughTransformer::new(ImageU8::gray(64, 64, &img)).unwrap();
    let mut again = fht.accumulator().clone();
    assert_eq!(normalize(&mut again), Normalization::Scaled { min: 0, max: 255 });
    assert_eq!(&again, fht.accumulator());
}

#[test]
fn identical_channels_sum_to_the_gray_result() {
    init_logger();
    let gray = noisy_line_u8(64, 12.0);
    let rgb = replicate_channels(&gray, 3);

    let from_gray = FastHoughTransformer::new(ImageU8::gray(64, 64, &gray)).unwrap();
    let from_rgb = FastHoughTransformer::new(ImageU8::interleaved(64, 64, 3, &rgb)).unwrap();
    assert_eq!(from_rgb.accumulator(), from_gray.accumulator());
    assert_eq!(from_rgb.apply(), from_gray.apply());

    let luma = FastHoughTransformer::with_params(
        ImageU8::interleaved(64, 64, 3, &rgb),
        TransformParams {
            channel_policy: ChannelPolicy::Luma,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(luma.accumulator(), from_gray.accumulator());
}

#[test]
fn non_square_input_is_padded() {
    let (w, h) = (100usize, 60usize);
    let img = vec![17u8; w * h];
    let fht = FastHoughTransformer::new(ImageU8::gray(w, h, &img)).unwrap();
    let size = fht.working_size();
    assert_eq!((size.n, size.mark_in_degree), (128, 1));
    assert_eq!((fht.accumulator().w, fht.accumulator().h), (271, 90));
    assert!(fht.accumulator().data().iter().all(|&v| (0..=255).contains(&v)));
}

#[test]
fn accumulator_export_round_trips() {
    let img = noisy_line_u8(64, -8.0);
    let fht = FastHoughTransformer::new(ImageU8::gray(64, 64, &img)).unwrap();
    let dir = std::env::temp_dir().join(format!("fast-hough-e2e-{}", std::process::id()));
    let path = dir.join("accumulator.png");
    fht.save_accumulator(&path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!((loaded.width(), loaded.height()), (135, 90));
    let expected: Vec<u8> = fht.accumulator().data().iter().map(|&v| v as u8).collect();
    assert_eq!(loaded.as_view().data, expected.as_slice());

    save_accumulator(fht.accumulator(), &dir.join("copy.png")).unwrap();
    let _ = std::fs::remove_dir_all(&dir);
}
