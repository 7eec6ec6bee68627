mod common;

use common::{periodic_pair, shifted_pair};
use corrpiv::{write_field_csv, GridResolution, Piv, PivParams};

const WIDTH: usize = 96;
const HEIGHT: usize = 80;

fn params(threshold_pct: i32) -> PivParams {
    PivParams::new(8, 4, GridResolution::new(6, 5), threshold_pct)
}

/// Grid cells whose search window never overlaps the zero padding.
fn interior_cells(piv: &Piv) -> Vec<(usize, usize, usize, usize)> {
    let spec = piv.params().grid.resolve(WIDTH, HEIGHT).unwrap();
    let grid = corrpiv::build_grid(WIDTH, HEIGHT, spec).unwrap();
    let reach = piv.params().padding();
    let mut cells = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let (x, y) = grid.point(col, row).unwrap();
            if x >= reach && y >= reach && x + reach <= WIDTH && y + reach <= HEIGHT {
                cells.push((col, row, x, y));
            }
        }
    }
    cells
}

#[test]
fn pipeline_recovers_integer_shift() {
    let (a, b) = periodic_pair(16, WIDTH, HEIGHT, 3.0, -2.0, 7);
    let piv = Piv::new(params(50)).unwrap();
    let field = piv.compute(&a, &b).unwrap();
    assert_eq!((field.cols(), field.rows()), (6, 5));

    let cells = interior_cells(&piv);
    assert!(cells.len() >= 12, "only {} interior cells", cells.len());
    for (col, row, x, y) in cells {
        let (dx, dy) = field
            .get(col, row)
            .unwrap_or_else(|| panic!("undetermined at ({x}, {y})"));
        assert!((dx - 3.0).abs() < 0.05, "dx at ({x}, {y}) = {dx}");
        assert!((dy + 2.0).abs() < 0.05, "dy at ({x}, {y}) = {dy}");
    }
}

#[test]
fn pipeline_refines_horizontal_subpixel_shift() {
    let (a, b) = periodic_pair(16, WIDTH, HEIGHT, 1.4, 0.0, 11);
    let piv = Piv::new(params(50)).unwrap();
    let field = piv.compute(&a, &b).unwrap();

    for (col, row, x, y) in interior_cells(&piv) {
        let (dx, dy) = field.get(col, row).unwrap();
        assert!((dx - 1.4).abs() < 0.1, "dx at ({x}, {y}) = {dx}");
        assert!(dy.abs() < 0.05, "dy at ({x}, {y}) = {dy}");
    }
}

#[test]
fn vertical_subpixel_fraction_is_mirrored_about_the_peak_row() {
    let (a, b) = periodic_pair(16, WIDTH, HEIGHT, 0.0, 1.4, 13);
    let piv = Piv::new(params(50)).unwrap();
    let field = piv.compute(&a, &b).unwrap();

    // The integer peak sits one row down; the vertical fit reports the
    // fraction toward larger rows with a negative sign.
    for (col, row, x, y) in interior_cells(&piv) {
        let (dx, dy) = field.get(col, row).unwrap();
        assert!(dx.abs() < 0.05, "dx at ({x}, {y}) = {dx}");
        assert!((dy - 0.6).abs() < 0.1, "dy at ({x}, {y}) = {dy}");
    }
}

#[test]
fn shift_at_search_radius_lands_on_map_border() {
    let (a, b) = periodic_pair(16, WIDTH, HEIGHT, 4.0, 0.0, 3);
    let piv = Piv::new(params(50)).unwrap();
    let field = piv.compute(&a, &b).unwrap();

    for (col, row, _, _) in interior_cells(&piv) {
        // Border peaks carry no sub-pixel correction on either axis.
        assert_eq!(field.get(col, row), Some((4.0, 0.0)));
    }
}

#[test]
fn threshold_gate_rejects_uncorrelated_frames() {
    let (a, _) = shifted_pair(WIDTH, HEIGHT, 0.0, 0.0, 21);
    let (b, _) = shifted_pair(WIDTH, HEIGHT, 0.0, 0.0, 22);

    let strict = Piv::new(params(90)).unwrap();
    let field = strict.compute(&a, &b).unwrap();
    assert_eq!(field.determined_count(), 0);
    assert!(field.dx().data().iter().all(|v| v.is_nan()));
    assert!(field.dy().data().iter().all(|v| v.is_nan()));

    let permissive = Piv::new(params(-100)).unwrap();
    let field = permissive.compute(&a, &b).unwrap();
    assert_eq!(field.determined_count(), 30);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let (a, b) = shifted_pair(WIDTH, HEIGHT, -1.0, 2.0, 5);
    let piv = Piv::new(params(30)).unwrap();
    let first = piv.compute(&a, &b).unwrap();
    let second = piv.compute(&a, &b).unwrap();

    let bits = |values: &[f32]| values.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(first.dx().data()), bits(second.dx().data()));
    assert_eq!(bits(first.dy().data()), bits(second.dy().data()));
}

#[test]
fn field_serializes_one_line_per_grid_row() {
    let (a, b) = shifted_pair(WIDTH, HEIGHT, 2.0, 1.0, 9);
    let piv = Piv::new(params(95)).unwrap();
    let field = piv.compute(&a, &b).unwrap();

    let mut dx = Vec::new();
    let mut dy = Vec::new();
    write_field_csv(&field, &mut dx, &mut dy).unwrap();
    for text in [String::from_utf8(dx).unwrap(), String::from_utf8(dy).unwrap()] {
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let cells: Vec<&str> = line.split(',').collect();
            assert_eq!(cells.len(), 6);
            for cell in cells {
                assert!(cell == "nan" || cell.parse::<f32>().is_ok(), "bad cell {cell}");
            }
        }
    }
}
