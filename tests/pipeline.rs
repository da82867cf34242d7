use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use colorcloud::{
    Coords, Error, PlotKind, PlotParams, load_raster, plot_image_to_path, prepare_image,
};

/// Pixel (x, y) encodes its own position so crops can be checked against the source.
fn write_fixture(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

#[test]
fn loaded_png_keeps_pixels_and_size() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "grid.png", 40, 30);

    let raster = load_raster(&path).unwrap();
    assert_eq!((raster.width(), raster.height()), (40, 30));
    assert_eq!(raster.pixel(29, 39), [39, 29, 68]);
}

#[test]
fn crop_origin_reproduces_absolute_locations() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "tall.png", 50, 200);
    let raster = load_raster(&path).unwrap();

    let params = PlotParams {
        plot: PlotKind::Surface,
        at: Some(Coords::new(25, 100)),
        ..Default::default()
    };
    let prepared = prepare_image(&raster, &params).unwrap();
    assert_eq!(prepared.origin, (9, 84));
    assert_eq!(
        (prepared.raster.width(), prepared.raster.height()),
        (32, 32)
    );

    let (x0, y0) = prepared.origin;
    for r in 0..prepared.raster.height() {
        for c in 0..prepared.raster.width() {
            let [red, green, _] = prepared.raster.pixel(r, c);
            assert_eq!((red as usize, green as usize), (c + x0, r + y0));
        }
    }
}

#[test]
fn resize_uses_plot_default_maxsize() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "wide.png", 200, 100);
    let raster = load_raster(&path).unwrap();

    let hist = prepare_image(&raster, &PlotParams::default()).unwrap();
    assert_eq!((hist.raster.width(), hist.raster.height()), (50, 25));

    let surface = PlotParams {
        plot: PlotKind::Surface,
        ..Default::default()
    };
    let untouched = prepare_image(&raster, &surface).unwrap();
    assert_eq!(untouched.raster, raster);
}

#[test]
fn unreadable_image_is_fatal() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("broken.png");
    std::fs::write(&bogus, b"definitely not a png").unwrap();

    let out = dir.path().join("out.png");
    let err = plot_image_to_path(&bogus, Some(&out), &PlotParams::default()).unwrap_err();
    assert!(matches!(err, Error::Image(_)));
    assert!(!out.exists());
}

#[test]
fn window_outside_image_is_fatal_before_rendering() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "square.png", 100, 100);
    let out = dir.path().join("out.png");

    let params = PlotParams {
        at: Some(Coords::new(200, 200)),
        ..Default::default()
    };
    let err = plot_image_to_path(&path, Some(&out), &params).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Window centered at (200, 200) of size 32 is out of the image of size 100x100"
    );
    assert!(!out.exists());
}

#[test]
fn every_plot_kind_writes_a_figure() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "small.png", 24, 16);

    for plot in [PlotKind::Hist, PlotKind::Surface, PlotKind::Contour] {
        let out = dir.path().join(format!("{plot}.png"));
        let params = PlotParams {
            plot,
            ..Default::default()
        };
        let written = plot_image_to_path(&path, Some(&out), &params).unwrap();
        assert_eq!(written, out);

        let figure = image::open(&out).unwrap().into_rgb8();
        assert_eq!((figure.width(), figure.height()), (1920, 960));
        let drawn = figure.pixels().filter(|px| px.0 != [255, 255, 255]).count();
        assert!(drawn > 1000, "{plot}: only {drawn} non-white pixels");
    }
}
