#[cfg(test)]
mod tests {
    use crate::{Category, Roll, Yatzy, CAT_NAMES, YATZY_SCORE};

    fn all_legal_rolls() -> impl Iterator<Item = Roll> {
        // 6^5 = 7776 hands.
        (0..7776u32).map(|mut n| {
            let mut d = [0u8; 5];
            for face in d.iter_mut() {
                *face = (n % 6) as u8 + 1;
                n /= 6;
            }
            Roll::new(d)
        })
    }

    #[test]
    fn chance_is_sum_of_dice() {
        assert_eq!(Yatzy.chance(&Roll::new([1, 2, 3, 4, 5])), 15);
        assert_eq!(Yatzy.chance(&Roll::new([6, 6, 6, 6, 6])), 30);
    }

    #[test]
    fn yatzy_scores_50_when_all_dice_match() {
        assert_eq!(Yatzy.yatzy(&Roll::new([2, 2, 2, 2, 2])), 50);
        assert_eq!(Yatzy.yatzy(&Roll::new([1, 2, 3, 4, 5])), 0);
        // Four of a kind is not enough.
        assert_eq!(Yatzy.yatzy(&Roll::new([6, 6, 6, 6, 5])), 0);
    }

    #[test]
    fn ones_counts_the_ones() {
        assert_eq!(Yatzy.ones(&Roll::new([1, 2, 1, 3, 5])), 2);
        assert_eq!(Yatzy.ones(&Roll::new([2, 3, 4, 5, 6])), 0);
        assert_eq!(Yatzy.ones(&Roll::new([1, 1, 1, 1, 1])), 5);
    }

    #[test]
    fn rules_hold_over_every_legal_hand() {
        let y = Yatzy::new();
        for r in all_legal_rolls() {
            assert_eq!(y.chance(&r), r.sum(), "chance for {r}");
            let expect_yatzy = if r.is_uniform() { YATZY_SCORE } else { 0 };
            assert_eq!(y.yatzy(&r), expect_yatzy, "yatzy for {r}");
            let ones = r.values().iter().filter(|&&f| f == 1).count() as u32;
            assert_eq!(y.ones(&r), ones, "ones for {r}");
        }
    }

    #[test]
    fn score_dispatches_by_category() {
        let r = Roll::new([1, 1, 3, 4, 6]);
        assert_eq!(Yatzy.score(Category::Ones, &r), 2);
        assert_eq!(Yatzy.score(Category::Chance, &r), 15);
        assert_eq!(Yatzy.score(Category::Yatzy, &r), 0);
        assert_eq!(Yatzy.score_all(&r), [2, 15, 0]);
        assert_eq!(CAT_NAMES.len(), Yatzy.score_all(&r).len());
    }

    #[test]
    fn best_picks_highest_category() {
        assert_eq!(
            Yatzy.best(&Roll::new([1, 2, 3, 4, 5])),
            (Category::Chance, 15)
        );
        assert_eq!(
            Yatzy.best(&Roll::new([3, 3, 3, 3, 3])),
            (Category::Yatzy, 50)
        );
    }

    #[test]
    fn best_breaks_ties_by_category_index() {
        // Chance 1+0+0+0+0 = 1 ties with ones = 1.
        assert_eq!(Yatzy.best(&Roll::new([1, 0, 0, 0, 0])), (Category::Ones, 1));
    }

    #[test]
    fn unvalidated_faces_are_scored_as_given() {
        let zeros = Roll::new([0, 0, 0, 0, 0]);
        assert_eq!(Yatzy.score_all(&zeros), [0, 0, 50]);
        assert_eq!(Yatzy.chance(&Roll::new([7, 7, 7, 7, 9])), 37);
    }

    #[test]
    fn scoring_is_repeatable() {
        let r = Roll::new([1, 2, 1, 3, 5]);
        let first = Yatzy.score_all(&r);
        for _ in 0..3 {
            assert_eq!(Yatzy.score_all(&r), first);
        }
    }
}
