use super::*;

fn triangle_path(s: &mut RecordingSurface, pts: [Px; 3], color: &str) {
    s.begin_path();
    s.move_to(pts[0]);
    s.line_to(pts[1]);
    s.line_to(pts[2]);
    s.close_path();
    s.fill(color).unwrap();
    s.stroke("#444", 1.0).unwrap();
}

#[test]
fn resize_starts_a_fresh_frame() {
    let mut s = RecordingSurface::new();
    s.fill_rect(Rect::default(), "#fff").unwrap();
    s.resize(10.0, 7.5).unwrap();
    assert_eq!(s.ops, vec![DrawOp::Resize {
        width: 10.0,
        height: 7.5
    }]);
    assert_eq!(s.resizes, 1);
    assert_eq!((s.width, s.height), (10.0, 7.5));
}

#[test]
fn paths_are_reassembled_per_fill() {
    let mut s = RecordingSurface::new();
    let a = [Px::new(0.0, 0.0), Px::new(1.0, 2.0), Px::new(2.0, 0.0)];
    let b = [Px::new(5.0, 5.0), Px::new(6.0, 3.0), Px::new(7.0, 5.0)];
    triangle_path(&mut s, a, "red");
    triangle_path(&mut s, b, "blue");

    let tris = s.triangles();
    assert_eq!(tris.len(), 2);
    assert_eq!(tris[0].vertices, a.to_vec());
    assert_eq!(tris[1].fill, "blue");
    assert!(s.circles().is_empty());
}

#[test]
fn circles_and_labels_are_reported() {
    let mut s = RecordingSurface::new();
    s.begin_path();
    s.arc(Px::new(3.0, 4.0), 2.0).unwrap();
    s.fill("#333").unwrap();
    s.fill_text("7", Px::new(3.0, 4.0), 2.2, "#DDD").unwrap();

    assert_eq!(s.circles(), vec![(Px::new(3.0, 4.0), 2.0, "#333".to_string())]);
    assert_eq!(s.labels(), vec!["7".to_string()]);
    assert!(s.triangles().is_empty());
}
