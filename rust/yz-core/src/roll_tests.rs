#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Roll, RollError};

    #[test]
    fn sum_adds_all_dice() {
        assert_eq!(Roll::new([1, 2, 3, 4, 5]).sum(), 15);
        assert_eq!(Roll::new([6, 6, 6, 6, 6]).sum(), 30);
    }

    #[test]
    fn uniform_when_all_dice_match() {
        assert!(Roll::new([2, 2, 2, 2, 2]).is_uniform());
        assert!(!Roll::new([1, 2, 3, 4, 5]).is_uniform());
        // Only the last die differs.
        assert!(!Roll::new([4, 4, 4, 4, 3]).is_uniform());
        // Only the first die differs.
        assert!(!Roll::new([3, 4, 4, 4, 4]).is_uniform());
    }

    #[test]
    fn queries_ignore_order() {
        let a = Roll::new([1, 2, 3, 4, 5]);
        let b = Roll::new([5, 3, 1, 4, 2]);
        assert_eq!(a.sum(), b.sum());
        assert_eq!(a.is_uniform(), b.is_uniform());
        assert_eq!(a.count_of(3), b.count_of(3));
        // ...but the roll keeps the order it was given.
        assert_ne!(a, b);
        assert_eq!(b.values(), &[5, 3, 1, 4, 2]);
    }

    #[test]
    fn equal_content_means_equal_rolls() {
        let mut set = HashSet::new();
        set.insert(Roll::new([1, 1, 2, 3, 6]));
        set.insert(Roll::from([1, 1, 2, 3, 6]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn new_accepts_out_of_range_faces() {
        let r = Roll::new([0, 7, 1, 1, 1]);
        assert_eq!(r.sum(), 10);
        assert_eq!(
            r.validate(),
            Err(RollError::InvalidDieFace { index: 0, face: 0 })
        );
    }

    #[test]
    fn try_new_rejects_first_bad_face() {
        assert_eq!(
            Roll::try_new([1, 2, 7, 0, 3]),
            Err(RollError::InvalidDieFace { index: 2, face: 7 })
        );
        assert!(Roll::try_new([1, 2, 3, 4, 6]).is_ok());
    }

    #[test]
    fn try_from_slice_requires_five_dice() {
        let four: &[u8] = &[1, 2, 3, 4];
        assert_eq!(Roll::try_from(four), Err(RollError::WrongDiceCount { got: 4 }));
        let five: &[u8] = &[1, 2, 3, 4, 5];
        assert_eq!(Roll::try_from(five), Ok(Roll::new([1, 2, 3, 4, 5])));
    }

    #[test]
    fn parses_comma_or_space_separated() {
        assert_eq!("1,2,3,4,5".parse::<Roll>(), Ok(Roll::new([1, 2, 3, 4, 5])));
        assert_eq!("6 6  6 6 6".parse::<Roll>(), Ok(Roll::new([6; 5])));
        assert_eq!("1, 1, 2, 2, 3".parse::<Roll>(), Ok(Roll::new([1, 1, 2, 2, 3])));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert_eq!(
            "1,2,x,4,5".parse::<Roll>(),
            Err(RollError::ParseFace("x".to_string()))
        );
        assert_eq!(
            "1,2,3,4,5,6".parse::<Roll>(),
            Err(RollError::WrongDiceCount { got: 6 })
        );
        assert_eq!("".parse::<Roll>(), Err(RollError::WrongDiceCount { got: 0 }));
    }

    #[test]
    fn display_round_trips() {
        let r = Roll::new([3, 1, 4, 1, 5]);
        assert_eq!(r.to_string(), "3,1,4,1,5");
        assert_eq!(r.to_string().parse::<Roll>(), Ok(r));
    }
}
