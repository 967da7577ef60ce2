use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::{IntoEnumIterator, VariantArray};

use crate::*;

type Grid = [[u32; 3]; 3];

fn labels(cube: &CubeState, id: FaceId) -> Grid {
    cube.face(id).rows().clone().map(|row| row.map(|f| *f.label()))
}

fn colors(cube: &CubeState, id: FaceId) -> [String; 3] {
    cube.face(id)
        .rows()
        .clone()
        .map(|row| row.iter().map(|f| f.color().symbol()).collect())
}

fn assert_labels(cube: &CubeState, expected: [(FaceId, Grid); 6]) {
    for (id, grid) in expected {
        assert_eq!(grid, labels(cube, id), "{id} face");
    }
}

fn sorted_facelets<L: Clone + Ord>(cube: &CubeState<L>) -> Vec<Facelet<L>> {
    let mut facelets: Vec<_> = cube.facelets().cloned().collect();
    facelets.sort();
    facelets
}

fn quarter(face: FaceLetter) -> Move {
    Move::new(face, TurnAmount::Clockwise)
}

#[test]
fn test_solved_layout() {
    let cube = CubeState::solved();
    assert!(cube.is_solved());
    assert_eq!(cube, CubeState::default());

    let expected_colors = [
        (FaceId::Top, Color::Orange),
        (FaceId::Left, Color::Green),
        (FaceId::Center, Color::Yellow),
        (FaceId::Right, Color::White),
        (FaceId::Bottom, Color::Red),
        (FaceId::TailEnd, Color::Blue),
    ];
    for (id, color) in expected_colors {
        assert!(cube.face(id).iter().all(|f| f.color() == color), "{id}");
    }

    let flat_labels: Vec<u32> = cube.facelets().map(|f| *f.label()).collect();
    assert_eq!((1..=54).collect::<Vec<u32>>(), flat_labels);
}

#[test]
fn test_construction_fills_faces_row_major() {
    let cube = CubeState::solved();
    assert_eq!([[1, 2, 3], [4, 5, 6], [7, 8, 9]], labels(&cube, FaceId::Top));
    assert_eq!(
        [[28, 29, 30], [31, 32, 33], [34, 35, 36]],
        labels(&cube, FaceId::Right),
    );
    assert_eq!(
        [[46, 47, 48], [49, 50, 51], [52, 53, 54]],
        labels(&cube, FaceId::TailEnd),
    );
    assert_eq!(&Facelet::new(Color::Yellow, 23), cube.face(FaceId::Center).center());
    assert_eq!(Some(&Facelet::new(Color::Green, 16)), cube.face(FaceId::Left).get(2, 0));
    assert_eq!(None, cube.face(FaceId::Left).get(3, 0));
    assert_eq!(Facelet::new(Color::Red, 42), cube.face(FaceId::Bottom)[(1, 2)]);

    // Constructing from the facelets of a cube reproduces it.
    let mut scrambled = CubeState::solved();
    scrambled.apply_notation("R U F' D2").unwrap();
    let rebuilt: CubeState = CubeState::new(scrambled.facelets().cloned()).unwrap();
    assert_eq!(scrambled, rebuilt);
}

#[test]
fn test_construction_from_symbols() {
    let entries = SOLVED_LAYOUT.map(|(color, label)| (color.as_str(), label.to_string()));
    let cube = CubeState::from_symbols(entries.iter().map(|(s, l)| (*s, l.clone()))).unwrap();
    assert!(cube.is_solved());
    assert_eq!("54", cube.face(FaceId::TailEnd)[(2, 2)].label().as_str());
}

#[test]
fn test_invalid_size() {
    for n in [0, 53, 55] {
        let facelets = (0..n).map(|i| (Color::Orange, i));
        assert_eq!(
            Err(CubeError::InvalidSize {
                expected: 54,
                actual: n as usize,
            }),
            CubeState::<i32>::new(facelets),
        );
    }

    // Size is checked before colors.
    let entries = std::iter::repeat_n(("X", 0), 53);
    assert_eq!(
        Err(CubeError::InvalidSize {
            expected: 54,
            actual: 53,
        }),
        CubeState::from_symbols(entries),
    );
}

#[test]
fn test_invalid_color() {
    let mut entries: Vec<(&str, u32)> = SOLVED_LAYOUT
        .iter()
        .map(|&(color, label)| (color.as_str(), label))
        .collect();
    entries[7].0 = "X";
    assert_eq!(
        Err(CubeError::InvalidColor {
            index: Some(7),
            symbol: "X".to_string(),
        }),
        CubeState::from_symbols(entries.clone()),
    );

    // Color symbols are case-sensitive.
    entries[7].0 = "o";
    assert!(matches!(
        CubeState::from_symbols(entries),
        Err(CubeError::InvalidColor { index: Some(7), .. }),
    ));

    for &color in Color::VARIANTS {
        assert_eq!(color.as_str(), color.symbol().to_string());
        assert_eq!(color.as_str(), color.to_string());
        assert_eq!(Ok(color), Color::from_symbol(color.as_str()));
    }
    assert_eq!('B', Color::Blue.symbol());

    assert_eq!(Ok(Color::White), "W".parse());
    assert!("".parse::<Color>().is_err());
    assert!("OG".parse::<Color>().is_err());
}

#[test]
fn test_facelet_specs() {
    let spec: FaceletSpec = "O:22".parse().unwrap();
    assert_eq!(Facelet::new(Color::Orange, "22".to_string()), spec.0);
    assert_eq!("O:22", spec.to_string());

    for (entry, reason) in [
        ("O22", "missing `:` between color and label"),
        ("O:", "missing label"),
        (":22", "missing color"),
    ] {
        assert_eq!(
            Err(CubeError::InvalidEntry {
                index: None,
                entry: entry.to_string(),
                reason,
            }),
            entry.parse::<FaceletSpec>(),
        );
    }
    let spec: FaceletSpec = "O:2:2".parse().unwrap();
    assert_eq!("2:2", spec.0.label().as_str());
    assert_eq!("O:2:2", spec.to_string());

    assert!(matches!(
        "X:22".parse::<FaceletSpec>(),
        Err(CubeError::InvalidColor { .. }),
    ));

    let list = parse_facelet_list("O:1, G:2\nY:3  W:4,").unwrap();
    assert_eq!(
        vec![Color::Orange, Color::Green, Color::Yellow, Color::White],
        list.iter().map(|f| f.color()).collect::<Vec<_>>(),
    );
    assert!(matches!(
        parse_facelet_list("O:1 G:2 Y3"),
        Err(CubeError::InvalidEntry { index: Some(2), .. }),
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        "cube must have exactly 54 facelets; got 53",
        CubeError::InvalidSize {
            expected: 54,
            actual: 53,
        }
        .to_string(),
    );
    assert_eq!(
        "entry 3: invalid color \"X\" (expected one of O, G, Y, W, R, B)",
        Color::from_symbol("X").unwrap_err().at(3).to_string(),
    );
    assert_eq!("\"Q\" is not a valid move", CubeError::InvalidMove("Q".into()).to_string());
}

#[test]
fn test_move_tokens() {
    for (i, &token) in MOVE_TOKENS.iter().enumerate() {
        let m: Move = token.parse().unwrap();
        assert_eq!(token, m.to_string());
        assert_eq!(i, m.token_index());
        assert_eq!((i % 3 + 1) as u8, m.units());
    }
    assert_eq!(Ok(Move::new(FaceLetter::U, TurnAmount::CounterClockwise)), "U'".parse());
    assert_eq!(Ok(Move::new(FaceLetter::D, TurnAmount::Half)), "D2".parse());

    for token in ["Q", "", "f", "F3", "R2'", "R'2", " R", "F F"] {
        assert_eq!(
            Err(CubeError::InvalidMove(token.to_string())),
            token.parse::<Move>(),
        );
    }
}

#[test]
fn test_invalid_move_leaves_cube_untouched() {
    let mut cube = CubeState::solved();
    cube.apply_move("R").unwrap();
    let before = cube.clone();

    assert_eq!(Err(CubeError::InvalidMove("Q".to_string())), cube.apply_move("Q"));
    assert_eq!(before, cube);

    // The whole sequence is validated first.
    assert!(cube.apply_notation("U F Q R").is_err());
    assert_eq!(before, cube);
}

#[test]
fn test_sequences() {
    let moves = parse_sequence("R U  R'\tU'").unwrap();
    assert_eq!("R U R' U'", format_sequence(&moves));
    assert_eq!("U R U' R'", format_sequence(&invert_sequence(&moves)));
    assert_eq!(Ok(vec![]), parse_sequence("   "));
    assert_eq!(
        Err(CubeError::InvalidMove("x".to_string())),
        parse_sequence("R x U"),
    );
}

#[test]
fn test_rotate_face() {
    let mut cube = CubeState::solved();
    cube.top.rotate_cw();
    assert_eq!([[7, 4, 1], [8, 5, 2], [9, 6, 3]], labels(&cube, FaceId::Top));
    for _ in 0..3 {
        cube.top.rotate_cw();
    }
    assert_eq!(CubeState::solved(), cube);
}

#[test]
fn test_face_lines() {
    let cube = CubeState::solved();
    let face = cube.face(FaceId::Left);
    assert_eq!([13, 14, 15], face.row(1).map(|f| *f.label()));
    assert_eq!([12, 15, 18], face.col(2).map(|f| *f.label()));
    assert_eq!(None, face.get(0, 3));
}

#[test]
#[should_panic]
fn test_face_row_out_of_range() {
    CubeState::solved().face(FaceId::Top).row(3);
}

#[test]
#[should_panic]
fn test_face_col_out_of_range() {
    CubeState::solved().face(FaceId::Top).col(3);
}

#[test]
fn test_u_from_solved() {
    let mut cube = CubeState::solved();
    cube.apply_move("U").unwrap();

    assert_labels(
        &cube,
        [
            (FaceId::Top, [[1, 2, 21], [4, 5, 24], [7, 8, 27]]),
            (FaceId::Left, [[10, 11, 12], [13, 14, 15], [16, 17, 18]]),
            (FaceId::Center, [[19, 20, 39], [22, 23, 42], [25, 26, 45]]),
            (FaceId::Right, [[34, 31, 28], [35, 32, 29], [36, 33, 30]]),
            (FaceId::Bottom, [[37, 38, 48], [40, 41, 51], [43, 44, 54]]),
            (FaceId::TailEnd, [[46, 47, 3], [49, 50, 6], [52, 53, 9]]),
        ],
    );

    assert_eq!(["OOY", "OOY", "OOY"], colors(&cube, FaceId::Top));
    assert_eq!(["GGG", "GGG", "GGG"], colors(&cube, FaceId::Left));
    assert_eq!(["YYR", "YYR", "YYR"], colors(&cube, FaceId::Center));
    assert_eq!(["WWW", "WWW", "WWW"], colors(&cube, FaceId::Right));
    assert_eq!(["RRB", "RRB", "RRB"], colors(&cube, FaceId::Bottom));
    assert_eq!(["BBO", "BBO", "BBO"], colors(&cube, FaceId::TailEnd));

    assert_eq!(
        "           O O Y\n\
         \x20          O O Y\n\
         \x20          O O Y\n\
         G G G   Y Y R   W W W\n\
         G G G   Y Y R   W W W\n\
         G G G   Y Y R   W W W\n\
         \x20          R R B\n\
         \x20          R R B\n\
         \x20          R R B\n\
         \x20          B B O\n\
         \x20          B B O\n\
         \x20          B B O\n",
        cube.render(RenderMode::Color),
    );
}

#[test]
fn test_moves_do_not_commute() {
    let mut fr = CubeState::solved();
    fr.apply_notation("F R").unwrap();
    let mut rf = CubeState::solved();
    rf.apply_notation("R F").unwrap();

    assert_ne!(fr, rf);
    assert_labels(
        &fr,
        [
            (FaceId::Top, [[1, 2, 3], [4, 5, 6], [18, 15, 12]]),
            (FaceId::Left, [[10, 11, 37], [13, 14, 38], [48, 47, 46]]),
            (FaceId::Center, [[25, 22, 19], [26, 23, 20], [16, 17, 39]]),
            (FaceId::Right, [[7, 29, 30], [8, 32, 33], [27, 24, 21]]),
            (FaceId::Bottom, [[43, 40, 34], [44, 41, 31], [45, 42, 28]]),
            (FaceId::TailEnd, [[36, 35, 9], [49, 50, 51], [52, 53, 54]]),
        ],
    );
    assert_eq!([[1, 2, 3], [4, 5, 6], [46, 15, 12]], labels(&rf, FaceId::Top));
}

#[test]
fn test_quarter_turn_moves_twenty_facelets() {
    for face in FaceLetter::iter() {
        let mut cube = CubeState::solved();
        cube.apply(quarter(face));
        let moved = cube
            .facelets()
            .zip(CubeState::solved().facelets())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(20, moved, "{face}");
    }
}

#[test]
fn test_order_four() {
    for face in FaceLetter::iter() {
        let mut cube = CubeState::solved();
        for i in 1..=4 {
            cube.apply(quarter(face));
            assert_eq!(i == 4, cube == CubeState::solved(), "{face} x{i}");
        }
    }
}

#[test]
fn test_half_turn_is_two_quarter_turns() {
    for face in FaceLetter::iter() {
        let mut half = CubeState::solved();
        half.apply(Move::new(face, TurnAmount::Half));
        let mut twice = CubeState::solved();
        twice.apply_sequence([quarter(face), quarter(face)]);
        assert_eq!(twice, half, "{face}");
    }
}

#[test]
fn test_inverse_pairs() {
    for face in FaceLetter::iter() {
        let mut cube = CubeState::solved();
        cube.apply_move(&format!("{face}")).unwrap();
        cube.apply_move(&format!("{face}'")).unwrap();
        assert_eq!(CubeState::solved(), cube, "{face} {face}'");

        let mut ccw = CubeState::solved();
        ccw.apply(Move::new(face, TurnAmount::CounterClockwise));
        let mut three = CubeState::solved();
        three.apply_sequence([quarter(face); 3]);
        assert_eq!(three, ccw, "{face}'");
    }
}

#[test]
fn test_scramble_roundtrip() {
    let scramble = parse_sequence("F R U B L D F2 R2 U2 B2 L2 D2 F' R' U' B' L' D' R U").unwrap();
    assert_eq!(20, scramble.len());

    let mut cube = CubeState::solved();
    cube.apply_sequence(scramble.iter().copied());
    assert!(!cube.is_solved());
    assert_labels(
        &cube,
        [
            (FaceId::Top, [[46, 44, 27], [8, 5, 53], [30, 51, 1]]),
            (FaceId::Left, [[16, 20, 54], [31, 14, 15], [37, 4, 45]]),
            (FaceId::Center, [[3, 33, 52], [22, 23, 29], [36, 26, 19]]),
            (FaceId::Right, [[10, 2, 39], [6, 32, 35], [12, 40, 9]]),
            (FaceId::Bottom, [[48, 38, 7], [11, 41, 17], [18, 49, 21]]),
            (FaceId::TailEnd, [[25, 13, 28], [24, 50, 42], [43, 47, 34]]),
        ],
    );

    cube.apply_sequence(invert_sequence(&scramble));
    assert_eq!(CubeState::solved(), cube);
}

#[test]
fn test_render_solved() {
    let cube = CubeState::solved();
    let expected = "           O O O\n\
                    \x20          O O O\n\
                    \x20          O O O\n\
                    G G G   Y Y Y   W W W\n\
                    G G G   Y Y Y   W W W\n\
                    G G G   Y Y Y   W W W\n\
                    \x20          R R R\n\
                    \x20          R R R\n\
                    \x20          R R R\n\
                    \x20          B B B\n\
                    \x20          B B B\n\
                    \x20          B B B\n";
    assert_eq!(expected, cube.render(RenderMode::Color));
    assert_eq!(expected, cube.to_string());

    let label_render = cube.render(RenderMode::Label);
    let lines: Vec<&str> = label_render.lines().collect();
    assert_eq!(RENDERED_LINES, lines.len());
    assert_eq!("           1 2 3", lines[0]);
    assert_eq!("10 11 12   19 20 21   28 29 30", lines[3]);
    assert_eq!("           52 53 54", lines[11]);
}

#[test]
fn test_render_mode_parsing() {
    assert_eq!(Ok(RenderMode::Color), "color".parse());
    assert_eq!(Ok(RenderMode::Color), "Color".parse());
    assert_eq!(Ok(RenderMode::Color), "0".parse());
    assert_eq!(Ok(RenderMode::Label), "LABEL".parse());
    assert_eq!(Ok(RenderMode::Label), "1".parse());
    assert_eq!(
        Err(CubeError::InvalidRenderMode("2".to_string())),
        "2".parse::<RenderMode>(),
    );
    assert_eq!("label", RenderMode::Label.to_string());
}

#[test]
fn test_scramble_params() {
    let params = ScrambleParams {
        seed: 42,
        length: 30,
    };
    let moves = params.moves();
    assert_eq!(30, moves.len());
    assert_eq!(moves, params.moves());
    for pair in moves.windows(2) {
        assert_ne!(pair[0].face, pair[1].face);
    }
    assert_ne!(
        moves,
        ScrambleParams {
            seed: 43,
            length: 30,
        }
        .moves(),
    );

    let scrambled = CubeState::scrambled(params);
    let mut expected = CubeState::solved();
    expected.apply_sequence(moves);
    assert_eq!(expected, scrambled.state);
    assert_eq!(params, scrambled.params);

    assert!(ScrambleParams { seed: 1, length: 0 }.moves().is_empty());
}

proptest! {
    #[test]
    fn proptest_facelets_are_conserved(moves: Vec<Move>) {
        let mut cube = CubeState::solved();
        let before = sorted_facelets(&cube);
        cube.apply_sequence(moves);
        assert_eq!(before, sorted_facelets(&cube));
    }

    #[test]
    fn proptest_inverse_sequence_restores_cube(
        layout in prop::collection::vec(any::<Color>(), 54),
        moves: Vec<Move>,
    ) {
        let original = CubeState::<u32>::new(layout.into_iter().zip(0_u32..)).unwrap();
        let mut cube = original.clone();
        cube.apply_sequence(moves.iter().copied());
        cube.apply_sequence(invert_sequence(&moves));
        assert_eq!(original, cube);
    }

    #[test]
    fn proptest_centers_are_fixed(moves: Vec<Move>) {
        let mut cube = CubeState::solved();
        cube.apply_sequence(moves);
        for id in FaceId::VARIANTS {
            assert_eq!(
                CubeState::solved().face(*id).center(),
                cube.face(*id).center(),
            );
        }
    }

    #[test]
    fn proptest_move_token_roundtrip(m: Move) {
        assert_eq!(Ok(m), m.to_string().parse());
        assert_eq!(m, m.inverse().inverse());
    }
}
