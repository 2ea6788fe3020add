use epipolar_plotter::Float;
use epipolar_plotter::image::geometry::point::Point;
use epipolar_plotter::sfm::epipolar::{epipolar_lines, Fundamental};
use epipolar_plotter::visualize::{marker_annotations, line_overlays, palette_color};

#[test]
fn test_markers_are_numbered_from_one_in_selection_order() {
    let points = vec!(Point::<Float>::new(40.0, 12.0), Point::new(7.5, 99.0));
    let annotations = marker_annotations(&points);
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].label, "1");
    assert_eq!(annotations[0].legend, "Point 1");
    assert_eq!(annotations[0].position, Point::new(40.0, 12.0));
    assert_eq!(annotations[1].label, "2");
    assert_eq!(annotations[1].position, Point::new(7.5, 99.0));
}

#[test]
fn test_point_and_line_share_color() {
    let points = (0..12).map(|i| Point::<Float>::new(i as Float, 2.0*i as Float)).collect::<Vec<_>>();
    let lines = epipolar_lines(&Fundamental::identity(), &points);
    let annotations = marker_annotations(&points);
    let overlays = line_overlays(&lines, 640.0, 480.0);

    assert_eq!(annotations.len(), overlays.len());
    for (i, (annotation, overlay)) in annotations.iter().zip(overlays.iter()).enumerate() {
        assert_eq!(annotation.color, overlay.color);
        assert_eq!(annotation.color, palette_color(i));
        assert_eq!(overlay.legend, format!("Epipolar Line {}", i+1));
    }
}

#[test]
fn test_lines_span_the_image_width() {
    // identity F maps (x,y) to the line x*u + y*v + 1 = 0
    let lines = epipolar_lines(&Fundamental::identity(), &vec!(Point::new(1.0, -1.0)));
    let overlays = line_overlays(&lines, 200.0, 300.0);
    let segment = overlays[0].segment.unwrap();
    assert_eq!(segment.start, Point::new(0.0, 1.0));
    assert_eq!(segment.end, Point::new(200.0, 201.0));
}
