//! Integration tests for tinct crates.
//!
//! Checks every model against published reference values for nine sRGB
//! colors (converter: <https://ajalt.github.io/colormath/converter/>), in
//! both directions and with and without alpha.
//!
//! Reference values are written in their customary units (degrees, 0..100)
//! and normalized before comparison.

#[cfg(test)]
mod tests {
    use tinct_color::ColorModel;
    use tinct_core::{Color, Components};

    /// Reference tuples for one color.
    struct Reference {
        name: &'static str,
        rgb: [f64; 3],
        hsl: [f64; 3],
        hsv: [f64; 3],
        xyz: [f64; 3],
        lab: [f64; 3],
        oklab: [f64; 3],
        lchuv: [f64; 3],
        hsluv: [f64; 3],
        hpluv: [f64; 3],
    }

    const REFERENCES: &[Reference] = &[
        Reference {
            name: "black",
            rgb: [0.0, 0.0, 0.0],
            hsl: [0.0, 0.0, 0.0],
            hsv: [0.0, 0.0, 0.0],
            xyz: [0.0, 0.0, 0.0],
            lab: [0.0, 0.0, 0.0],
            oklab: [0.0, 0.0, 0.0],
            lchuv: [0.0, 0.0, 0.0],
            hsluv: [0.0, 0.0, 0.0],
            hpluv: [0.0, 0.0, 0.0],
        },
        Reference {
            name: "white",
            rgb: [1.0, 1.0, 1.0],
            hsl: [0.0, 0.0, 1.0],
            hsv: [0.0, 0.0, 1.0],
            xyz: [0.95046, 1.0, 1.08906],
            lab: [100.0, 0.0, 0.0],
            oklab: [1.0, 0.0, 0.0],
            lchuv: [100.0, 0.0, 0.0],
            hsluv: [0.0, 0.0, 100.0],
            hpluv: [0.0, 0.0, 100.0],
        },
        Reference {
            name: "red",
            rgb: [1.0, 0.0, 0.0],
            hsl: [0.0, 1.0, 0.5],
            hsv: [0.0, 1.0, 1.0],
            xyz: [0.41239, 0.21264, 0.01933],
            lab: [53.23711, 80.0901, 67.20326],
            oklab: [0.62796, 0.22486, 0.12585],
            lchuv: [53.23711, 179.03809, 12.17705],
            hsluv: [12.17705, 100.0, 53.23711],
            hpluv: [12.17705, 426.74677, 53.23711],
        },
        Reference {
            name: "green",
            rgb: [0.0, 1.0, 0.0],
            hsl: [120.0, 1.0, 0.5],
            hsv: [120.0, 1.0, 1.0],
            xyz: [0.35758, 0.71517, 0.11919],
            lab: [87.73552, -86.18159, 83.18662],
            oklab: [0.86644, -0.23389, 0.1795],
            lchuv: [87.73552, 135.78954, 127.71501],
            hsluv: [127.71501, 100.00002, 87.73552],
            hpluv: [127.71501, 490.14551, 87.73552],
        },
        Reference {
            name: "blue",
            rgb: [0.0, 0.0, 1.0],
            hsl: [240.0, 1.0, 0.5],
            hsv: [240.0, 1.0, 1.0],
            xyz: [0.18048, 0.07219, 0.95053],
            lab: [32.30087, 79.19527, -107.85547],
            oklab: [0.45201, -0.03246, -0.31153],
            lchuv: [32.30087, 130.68976, 265.87433],
            hsluv: [265.87433, 100.00001, 32.30087],
            hpluv: [265.87433, 513.41272, 32.30087],
        },
        Reference {
            name: "redish",
            rgb: [0.6, 0.4, 0.0],
            hsl: [40.0, 1.0, 0.3],
            hsv: [40.0, 1.0, 0.6],
            xyz: [0.17888, 0.16276, 0.02199],
            lab: [47.33437, 13.54214, 54.73176],
            oklab: [0.55095, 0.0306, 0.11226],
            lchuv: [47.33437, 63.42409, 48.32603],
            hsluv: [48.32603, 100.0, 47.33437],
            hpluv: [48.32603, 170.02666, 47.33437],
        },
        Reference {
            name: "greenish",
            rgb: [0.4, 0.6, 0.0],
            hsl: [80.0, 1.0, 0.3],
            hsv: [80.0, 1.0, 0.6],
            xyz: [0.1687, 0.25607, 0.04054],
            lab: [57.6619, -36.5132, 60.22545],
            oklab: [0.62281, -0.1053, 0.12838],
            lchuv: [57.6619, 71.91135, 111.0721],
            hsluv: [111.0721, 100.0, 57.6619],
            hpluv: [111.0721, 158.2515, 57.6619],
        },
        Reference {
            name: "blueish",
            rgb: [0.0, 0.4, 0.6],
            hsl: [200.0, 1.0, 0.3],
            hsv: [200.0, 1.0, 0.6],
            xyz: [0.105, 0.11802, 0.31863],
            lab: [40.89967, -5.34064, -34.66923],
            oklab: [0.4874, -0.05526, -0.09869],
            lchuv: [40.89967, 56.07965, 242.02414],
            hsluv: [242.02414, 100.00001, 40.89967],
            hpluv: [242.02414, 173.99023, 40.89967],
        },
        Reference {
            name: "pinkish",
            rgb: [1.0, 0.0, 0.4],
            hsl: [336.0, 1.0, 0.5],
            hsv: [336.0, 1.0, 1.0],
            xyz: [0.43637, 0.22223, 0.14563],
            lab: [54.26293, 82.86769, 18.87027],
            oklab: [0.63876, 0.2511, 0.04657],
            lchuv: [54.26293, 153.22729, 1.88082],
            hsluv: [1.88082, 99.99999, 54.26293],
            hpluv: [1.88082, 358.32098, 54.26293],
        },
    ];

    /// `(model, normalized expected tuple, tolerance)` for every reference entry.
    fn cases(r: &Reference) -> Vec<(ColorModel, [f64; 3], f64)> {
        let hue_first = |[h, a, b]: [f64; 3]| [h / 360.0, a, b];
        let cie = |v: [f64; 3]| v.map(|x| x / 100.0);
        let cie_lch = |[l, c, h]: [f64; 3]| [l / 100.0, c / 100.0, h / 360.0];
        let uv_hsl = |[h, s, l]: [f64; 3]| [h / 360.0, s / 100.0, l / 100.0];

        vec![
            (ColorModel::Rgb, r.rgb, 1e-12),
            (ColorModel::Hsl, hue_first(r.hsl), 1e-9),
            (ColorModel::Hsv, hue_first(r.hsv), 1e-9),
            (ColorModel::XyzD65, r.xyz, 1e-4),
            (ColorModel::LabD65, cie(r.lab), 2e-4),
            (ColorModel::Oklab, r.oklab, 1e-3),
            (ColorModel::Lchuv, cie_lch(r.lchuv), 1e-4),
            (ColorModel::Hsluv, uv_hsl(r.hsluv), 1e-4),
            (ColorModel::Hpluv, uv_hsl(r.hpluv), 1e-4),
        ]
    }

    fn assert_close(actual: &[f64], expected: &[f64], eps: f64, what: &str) {
        assert_eq!(actual.len(), expected.len(), "{what}");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!(a.is_finite(), "{what}[{i}] is not finite: {a}");
            assert!(
                (a - e).abs() <= eps,
                "{what}[{i}]: got {a}, expected {e} (diff {})",
                (a - e).abs()
            );
        }
    }

    #[test]
    fn test_to_model() {
        for r in REFERENCES {
            for (model, expected, eps) in cases(r) {
                let c = model.to_components(&Color::from(r.rgb));
                assert_close(&c.values, &expected, eps, &format!("{model} {}", r.name));
                assert_eq!(c.alpha, None);
            }
        }
    }

    #[test]
    fn test_to_model_with_alpha() {
        for r in REFERENCES {
            for (model, expected, eps) in cases(r) {
                let [cr, cg, cb] = r.rgb;
                let c = model.to_components(&Color::rgba(cr, cg, cb, 0.5));
                let what = format!("{model} {} alpha", r.name);
                assert_close(&c.to_vec(), &[expected[0], expected[1], expected[2], 0.5], eps, &what);
            }
        }
    }

    #[test]
    fn test_to_buffer_keeps_destination_alpha() {
        for r in REFERENCES {
            for (model, expected, eps) in cases(r) {
                let mut out = Components::new([0.0; 3], Some(1.0));
                model.to_buffer(&Color::from(r.rgb), &mut out);
                assert_close(&out.values, &expected, eps, &format!("{model} {} buffer", r.name));
                assert_eq!(out.alpha, Some(1.0));
            }
        }
    }

    #[test]
    fn test_from_model() {
        for r in REFERENCES {
            for (model, values, _) in cases(r) {
                let what = format!("{model} {} -> rgb", r.name);

                let mut bare = Color::rgb(0.5, 0.5, 0.5);
                model.apply(&mut bare, values, None);
                assert_close(&bare.to_vec(), &r.rgb, 1e-3, &what);

                let mut half = Color::default();
                model.apply(&mut half, values, Some(0.5));
                assert_close(&half.to_vec(), &[r.rgb[0], r.rgb[1], r.rgb[2], 0.5], 1e-3, &what);

                let mut opaque = Color::default();
                model.apply(&mut opaque, values, None);
                assert_close(&opaque.to_vec(), &[r.rgb[0], r.rgb[1], r.rgb[2], 1.0], 1e-3, &what);
            }
        }
    }

    #[test]
    fn test_hex_into_models() {
        let mut c = Color::default();
        tinct_format::from_hex(&mut c, "#996600").unwrap();
        let hsl = ColorModel::Hsl.to_components(&c);
        assert_close(&hsl.values, &[40.0 / 360.0, 1.0, 0.3], 1e-9, "hsl #996600");
        assert_eq!(hsl.alpha, Some(1.0));

        let mut pink = Color::default();
        ColorModel::Hsluv.apply(&mut pink, [1.88082 / 360.0, 0.9999999, 0.5426293], None);
        assert_eq!(tinct_format::to_hex(&pink), "#FF0066");
    }
}
