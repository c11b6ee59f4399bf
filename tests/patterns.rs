//! Pattern generator properties: exact fills, parity, masks, monotonicity.

use enough::Unstoppable;
use pretty_assertions::assert_eq;
use testcard::*;

fn rgb(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}

const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

// ── Solid ────────────────────────────────────────────────────────────

#[test]
fn solid_fills_every_sample() {
    let spec = PatternSpec::Solid {
        size: (5, 4),
        color: rgb(10, 20, 30),
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    assert_eq!(buffer.byte_len(), 5 * 4 * 3);
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(buffer.get(x, y), rgb(10, 20, 30));
        }
    }
}

// ── Checker ──────────────────────────────────────────────────────────

#[test]
fn checker_block_one_on_2x2() {
    let spec = PatternSpec::Checker {
        size: (2, 2),
        block: 1,
        color: rgb(120, 200, 80),
        channels: None,
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    // Even tiles are background, odd tiles take the color
    assert_eq!(buffer.get(0, 0), BLACK);
    assert_eq!(buffer.get(1, 1), BLACK);
    assert_eq!(buffer.get(1, 0), rgb(120, 200, 80));
    assert_eq!(buffer.get(0, 1), rgb(120, 200, 80));
}

#[test]
fn checker_contains_exactly_two_colors_with_correct_parity() {
    let color = rgb(200, 40, 90);
    let block = 3;
    let spec = PatternSpec::Checker {
        size: (10, 8),
        block,
        color,
        channels: None,
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    for y in 0..8 {
        for x in 0..10 {
            let expected = if (x / block + y / block) % 2 == 1 {
                color
            } else {
                BLACK
            };
            assert_eq!(buffer.get(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn checker_channel_mask_restricts_modulated_channels() {
    let spec = PatternSpec::Checker {
        size: (4, 4),
        block: 1,
        color: rgb(120, 200, 80),
        channels: Some("g".parse().unwrap()),
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    // Odd tiles carry only the green component; red/blue stay background
    assert_eq!(buffer.get(1, 0), rgb(0, 200, 0));
    assert_eq!(buffer.get(0, 0), BLACK);
}

// ── Lines ────────────────────────────────────────────────────────────

#[test]
fn lines_alternate_stripes() {
    let color = rgb(255, 255, 0);
    let spec = PatternSpec::Lines {
        size: (3, 8),
        line_height: 2,
        color,
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    for y in 0..8 {
        let expected = if (y / 2) % 2 == 1 { color } else { BLACK };
        for x in 0..3 {
            assert_eq!(buffer.get(x, y), expected, "pixel ({x},{y})");
        }
    }
}

// ── Gradient ─────────────────────────────────────────────────────────

#[test]
fn gradient_horizontal_red_endpoints() {
    let spec = PatternSpec::Gradient {
        size: (3, 1),
        channels: "r".parse().unwrap(),
        direction: Direction::Horizontal,
        descending: false,
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    assert_eq!(buffer.get(0, 0), rgb(0, 0, 0));
    assert_eq!(buffer.get(1, 0), rgb(128, 0, 0));
    assert_eq!(buffer.get(2, 0), rgb(255, 0, 0));
}

#[test]
fn gradient_descending_reverses_ramp() {
    let spec = PatternSpec::Gradient {
        size: (3, 1),
        channels: "r".parse().unwrap(),
        direction: Direction::Horizontal,
        descending: true,
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    assert_eq!(buffer.get(0, 0).r, 255);
    assert_eq!(buffer.get(1, 0).r, 128);
    assert_eq!(buffer.get(2, 0).r, 0);
}

#[test]
fn gradient_vertical_monotone_in_both_masked_channels() {
    let spec = PatternSpec::Gradient {
        size: (2, 40),
        channels: "gb".parse().unwrap(),
        direction: Direction::Vertical,
        descending: false,
    };
    let buffer = render(&spec, Unstoppable).unwrap();
    let mut prev = buffer.get(0, 0);
    assert_eq!(prev.r, 0);
    for y in 1..40 {
        let px = buffer.get(0, y);
        assert!(px.g >= prev.g && px.b >= prev.b, "row {y} not monotone");
        assert_eq!(px.g, px.b);
        assert_eq!(px.r, 0);
        prev = px;
    }
    assert_eq!(buffer.get(0, 39), rgb(0, 255, 255));
}

#[test]
fn gradient_diagonals_run_corner_to_corner() {
    let lr = render(
        &PatternSpec::Gradient {
            size: (3, 3),
            channels: "r".parse().unwrap(),
            direction: Direction::DiagLr,
            descending: false,
        },
        Unstoppable,
    )
    .unwrap();
    assert_eq!(lr.get(0, 0).r, 0);
    assert_eq!(lr.get(2, 2).r, 255);
    // Anti-diagonal is the midpoint
    assert_eq!(lr.get(2, 0).r, 128);
    assert_eq!(lr.get(0, 2).r, 128);

    let rl = render(
        &PatternSpec::Gradient {
            size: (3, 3),
            channels: "r".parse().unwrap(),
            direction: Direction::DiagRl,
            descending: false,
        },
        Unstoppable,
    )
    .unwrap();
    assert_eq!(rl.get(2, 0).r, 0);
    assert_eq!(rl.get(0, 2).r, 255);
}

#[test]
fn gradient_degenerate_span_is_zero() {
    for descending in [false, true] {
        let buffer = render(
            &PatternSpec::Gradient {
                size: (1, 4),
                channels: "rgb".parse().unwrap(),
                direction: Direction::Horizontal,
                descending,
            },
            Unstoppable,
        )
        .unwrap();
        for y in 0..4 {
            assert_eq!(buffer.get(0, y), BLACK);
        }
    }
}

// ── Validation ───────────────────────────────────────────────────────

#[test]
fn rejects_invalid_specs() {
    let bad = [
        PatternSpec::Solid {
            size: (0, 4),
            color: BLACK,
        },
        PatternSpec::Checker {
            size: (4, 4),
            block: 0,
            color: BLACK,
            channels: None,
        },
        PatternSpec::Lines {
            size: (4, 4),
            line_height: 0,
            color: BLACK,
        },
        PatternSpec::Gradient {
            size: (4, 4),
            channels: Channels {
                r: false,
                g: false,
                b: false,
            },
            direction: Direction::Vertical,
            descending: false,
        },
    ];
    for spec in bad {
        assert!(
            matches!(
                render(&spec, Unstoppable),
                Err(TestcardError::InvalidParameter(_))
            ),
            "{spec:?} should be rejected"
        );
    }
}

// ── Caller parameter parsing ─────────────────────────────────────────

#[test]
fn parses_color_triples() {
    assert_eq!(parse_color("10,20,30").unwrap(), rgb(10, 20, 30));
    assert_eq!(parse_color("0, 128, 255").unwrap(), rgb(0, 128, 255));
}

#[test]
fn rejects_out_of_range_color_instead_of_clamping() {
    for bad in ["256,0,0", "-1,0,0", "0,0", "1,2,3,4", "red,0,0", ""] {
        assert!(
            matches!(parse_color(bad), Err(TestcardError::InvalidParameter(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn parses_sizes() {
    assert_eq!(parse_size("1080x2340").unwrap(), (1080, 2340));
    assert_eq!(parse_size("2X2").unwrap(), (2, 2));
    for bad in ["0x5", "5x0", "5", "axb", "5x", ""] {
        assert!(
            matches!(parse_size(bad), Err(TestcardError::InvalidParameter(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn parses_channel_masks() {
    let gb: Channels = "gb".parse().unwrap();
    assert!(!gb.r && gb.g && gb.b);
    assert!("".parse::<Channels>().is_err());
    assert!("rgx".parse::<Channels>().is_err());
    assert!("rr".parse::<Channels>().is_err());
}

#[test]
fn parses_format_tags() {
    assert_eq!("png".parse::<FormatTag>().unwrap(), FormatTag::Png);
    assert_eq!("bmp".parse::<FormatTag>().unwrap(), FormatTag::Bmp);
    assert_eq!("ppm_p3".parse::<FormatTag>().unwrap(), FormatTag::PpmAscii);
    assert_eq!("ppm_p6".parse::<FormatTag>().unwrap(), FormatTag::PpmBinary);
    assert!(matches!(
        "gif".parse::<FormatTag>(),
        Err(TestcardError::InvalidParameter(_))
    ));
    assert_eq!(FormatTag::PpmAscii.extension(), "ppm");
    assert_eq!(FormatTag::PpmBinary.extension(), "ppm");
    assert_eq!(FormatTag::Png.extension(), "png");
}

#[test]
fn parses_directions() {
    assert_eq!(
        "diag_rl".parse::<Direction>().unwrap(),
        Direction::DiagRl
    );
    assert!("sideways".parse::<Direction>().is_err());
}
