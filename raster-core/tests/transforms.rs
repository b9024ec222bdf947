//! Algebraic laws of the frame transforms over arbitrary contents.

use proptest::array::uniform8;
use proptest::prelude::*;

use raster_core::Frame;

proptest! {
    #[test]
    fn rotate_left_then_right_is_identity(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        frame.rotate_left();
        frame.rotate_right();
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn rotate_right_then_left_is_identity(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        frame.rotate_right();
        frame.rotate_left();
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn four_quarter_turns_are_identity(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        for _ in 0..4 {
            frame.rotate_left();
        }
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn flip_horizontal_is_involution(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        frame.flip_horizontal();
        frame.flip_horizontal();
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn flip_vertical_is_involution(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        frame.flip_vertical();
        frame.flip_vertical();
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn invert_is_involution(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        frame.invert();
        frame.invert();
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn circular_shifts_are_inverses(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        frame.shift_left_circular();
        frame.shift_right_circular();
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn eight_right_rotations_are_identity(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        for _ in 0..8 {
            frame.shift_right_circular();
        }
        prop_assert_eq!(frame.rows(), rows);
    }

    #[test]
    fn plain_shift_left_zero_fills(rows in uniform8(any::<u8>())) {
        let mut frame = Frame::from_rows(rows);
        frame.shift_left();
        // Column 7 is dark after a left shift, whatever came before
        for row in 0..8 {
            prop_assert!(!frame.pixel(row, 7));
        }
    }

    #[test]
    fn rotate_left_pixel_map(rows in uniform8(any::<u8>()), row in 0u8..8, col in 0u8..8) {
        let frame = Frame::from_rows(rows);
        let mut rotated = frame;
        rotated.rotate_left();
        prop_assert_eq!(frame.pixel(row, col), rotated.pixel(7 - col, row));
    }

    #[test]
    fn u64_round_trip(bits in any::<u64>()) {
        let frame = Frame::from_u64(bits);
        prop_assert_eq!(u64::from_be_bytes(frame.rows()), bits);
    }
}
