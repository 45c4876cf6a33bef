//! A single scoring frame.
//!
//! A `Frame` records its own bowls and keeps a running credited total. Bonus
//! pins for strikes and spares are pushed in by the game as later bowls land,
//! so `frame_total` is always consistent with the bowls recorded so far.

use crate::core::types::{FrameNumber, PIN_COUNT, Pins};
use crate::error::ScoringError;

/// Bonus bowls owed to a strike in frames 1-9.
const STRIKE_BONUS_BOWLS: u8 = 2;
/// Bonus bowls owed to a spare in frames 1-9.
const SPARE_BONUS_BOWLS: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    number: FrameNumber,
    /// Back-link used to push bonus credit; `None` for frame 1.
    predecessor: Option<FrameNumber>,
    /// Slot three is only ever filled in the final frame.
    bowls: [Option<Pins>; 3],
    total: u16,
    bonus_pending: u8,
}

impl Frame {
    pub fn new(number: FrameNumber) -> Self {
        Self {
            number,
            predecessor: number.previous(),
            bowls: [None; 3],
            total: 0,
            bonus_pending: 0,
        }
    }

    pub fn number(&self) -> FrameNumber {
        self.number
    }

    pub fn predecessor(&self) -> Option<FrameNumber> {
        self.predecessor
    }

    pub fn first(&self) -> Option<Pins> {
        self.bowls[0]
    }

    pub fn second(&self) -> Option<Pins> {
        self.bowls[1]
    }

    pub fn third(&self) -> Option<Pins> {
        self.bowls[2]
    }

    /// Bowls recorded so far, in order.
    pub fn bowls(&self) -> impl Iterator<Item = Pins> + '_ {
        self.bowls.iter().map_while(|bowl| *bowl)
    }

    /// Record the next bowl for this frame.
    ///
    /// Fails without touching the frame when no slot remains or when `pins`
    /// exceeds the pins currently standing.
    pub fn bowl(&mut self, pins: Pins) -> Result<(), ScoringError> {
        if self.is_complete() {
            return Err(ScoringError::FrameAlreadyComplete { frame: self.number });
        }

        let standing = self.standing_pins();
        if pins.get() > standing {
            return Err(ScoringError::TooManyPins {
                frame: self.number,
                pins: pins.get(),
                standing,
            });
        }

        let slot = self.bowls.iter().position(Option::is_none).ok_or(
            ScoringError::FrameAlreadyComplete { frame: self.number },
        )?;
        self.bowls[slot] = Some(pins);
        self.total += u16::from(pins);

        if !self.number.is_last() {
            if slot == 0 && self.is_strike() {
                self.bonus_pending = STRIKE_BONUS_BOWLS;
            } else if slot == 1 && self.is_spare() {
                self.bonus_pending = SPARE_BONUS_BOWLS;
            }
        }

        Ok(())
    }

    /// Credit a later bowl to this frame if it is still owed bonus pins.
    ///
    /// Returns whether the pins were credited.
    pub(crate) fn credit_bonus(&mut self, pins: Pins) -> bool {
        if self.bonus_pending == 0 {
            return false;
        }
        self.total += u16::from(pins);
        self.bonus_pending -= 1;
        true
    }

    pub fn is_strike(&self) -> bool {
        self.first().is_some_and(Pins::is_all)
    }

    pub fn is_spare(&self) -> bool {
        match (self.first(), self.second()) {
            (Some(first), Some(second)) => {
                !first.is_all() && first.get() + second.get() == PIN_COUNT
            }
            _ => false,
        }
    }

    /// True when no further bowl may be recorded for this frame.
    pub fn is_complete(&self) -> bool {
        if self.number.is_last() {
            self.third().is_some()
                || (self.second().is_some() && !self.is_strike() && !self.is_spare())
        } else {
            self.is_strike() || self.second().is_some()
        }
    }

    /// Pins available to the next bowl of this frame; zero once complete.
    ///
    /// The final frame resets the rack after a strike or spare.
    pub fn standing_pins(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        match self.bowls {
            [None, ..] => PIN_COUNT,
            [Some(first), None, _] if first.is_all() => PIN_COUNT,
            [Some(first), None, _] => PIN_COUNT - first.get(),
            [Some(first), Some(second), None] if first.is_all() && !second.is_all() => {
                PIN_COUNT - second.get()
            }
            [Some(_), Some(_), None] => PIN_COUNT,
            _ => 0,
        }
    }

    /// Bonus bowls this frame is still waiting on.
    pub fn bonus_pending(&self) -> u8 {
        self.bonus_pending
    }

    /// Current credited total, which may still grow for an unsettled strike or spare.
    pub fn frame_total(&self) -> u16 {
        self.total
    }

    /// Complete with every owed bonus bowl credited.
    pub fn is_settled(&self) -> bool {
        self.is_complete() && self.bonus_pending == 0
    }

    /// The frame total once it can no longer change.
    pub fn settled_total(&self) -> Option<u16> {
        self.is_settled().then_some(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{frame_with, pins};

    #[test]
    fn new_frame_is_empty() {
        let frame = Frame::new(FrameNumber::FIRST);
        assert_eq!(frame.first(), None);
        assert_eq!(frame.second(), None);
        assert_eq!(frame.frame_total(), 0);
        assert_eq!(frame.predecessor(), None);
        assert!(!frame.is_complete());
        assert_eq!(frame.standing_pins(), 10);
    }

    #[test]
    fn open_frame_completes_after_two_bowls() {
        let frame = frame_with(1, &[1, 4]);
        assert!(frame.is_complete());
        assert!(frame.is_settled());
        assert_eq!(frame.frame_total(), 5);
        assert_eq!(frame.settled_total(), Some(5));
        assert_eq!(frame.bowls().collect::<Vec<_>>(), vec![pins(1), pins(4)]);
    }

    #[test]
    fn single_bowl_counts_toward_total() {
        let frame = frame_with(1, &[1]);
        assert!(!frame.is_complete());
        assert_eq!(frame.frame_total(), 1);
        assert_eq!(frame.standing_pins(), 9);
    }

    #[test]
    fn strike_completes_non_final_frame() {
        let mut frame = frame_with(1, &[10]);
        assert!(frame.is_strike());
        assert!(frame.is_complete());
        assert_eq!(frame.bonus_pending(), 2);
        assert_eq!(frame.settled_total(), None);

        let err = frame.bowl(pins(3)).expect_err("second bowl after strike");
        assert_eq!(
            err,
            ScoringError::FrameAlreadyComplete {
                frame: FrameNumber::FIRST
            }
        );
        assert_eq!(frame.second(), None);
        assert_eq!(frame.frame_total(), 10);
    }

    #[test]
    fn spare_waits_for_one_bonus_bowl() {
        let mut frame = frame_with(2, &[5, 5]);
        assert!(frame.is_spare());
        assert!(!frame.is_strike());
        assert_eq!(frame.bonus_pending(), 1);
        assert!(!frame.is_settled());

        assert!(frame.credit_bonus(pins(3)));
        assert!(!frame.credit_bonus(pins(9)));
        assert_eq!(frame.frame_total(), 13);
        assert_eq!(frame.settled_total(), Some(13));
    }

    #[test]
    fn ten_on_second_bowl_is_spare_not_strike() {
        let frame = frame_with(1, &[0, 10]);
        assert!(frame.is_spare());
        assert!(!frame.is_strike());
    }

    #[test]
    fn rejects_more_pins_than_standing() {
        let mut frame = frame_with(4, &[7]);
        let err = frame.bowl(pins(5)).expect_err("seven then five");
        assert_eq!(
            err,
            ScoringError::TooManyPins {
                frame: FrameNumber::new(4).expect("frame"),
                pins: 5,
                standing: 3,
            }
        );
        assert_eq!(frame.second(), None);
        assert_eq!(frame.frame_total(), 7);
    }

    #[test]
    fn final_frame_open_closes_after_two() {
        let mut frame = frame_with(10, &[3, 4]);
        assert!(frame.is_complete());
        assert_eq!(frame.bonus_pending(), 0);
        let err = frame.bowl(pins(1)).expect_err("third bowl in open tenth");
        assert_eq!(
            err,
            ScoringError::FrameAlreadyComplete {
                frame: FrameNumber::LAST
            }
        );
    }

    #[test]
    fn final_frame_spare_earns_third_bowl() {
        let frame = frame_with(10, &[2, 8]);
        assert!(!frame.is_complete());
        assert_eq!(frame.standing_pins(), 10);

        let frame = frame_with(10, &[2, 8, 6]);
        assert!(frame.is_complete());
        assert_eq!(frame.frame_total(), 16);
        assert_eq!(frame.settled_total(), Some(16));
    }

    #[test]
    fn final_frame_strike_resets_rack() {
        let frame = frame_with(10, &[10]);
        assert!(!frame.is_complete());
        assert_eq!(frame.standing_pins(), 10);
        assert_eq!(frame.bonus_pending(), 0);

        let frame = frame_with(10, &[10, 4]);
        assert_eq!(frame.standing_pins(), 6);

        let frame = frame_with(10, &[10, 10]);
        assert_eq!(frame.standing_pins(), 10);
    }

    #[test]
    fn final_frame_rejects_fourth_bowl() {
        let mut frame = frame_with(10, &[10, 10, 10]);
        assert!(frame.is_complete());
        assert_eq!(frame.frame_total(), 30);
        let err = frame.bowl(pins(10)).expect_err("fourth bowl");
        assert_eq!(
            err,
            ScoringError::FrameAlreadyComplete {
                frame: FrameNumber::LAST
            }
        );
    }

    #[test]
    fn final_frame_strike_then_split_rack_limits_third_bowl() {
        let mut frame = frame_with(10, &[10, 7]);
        let err = frame.bowl(pins(4)).expect_err("only three standing");
        assert_eq!(
            err,
            ScoringError::TooManyPins {
                frame: FrameNumber::LAST,
                pins: 4,
                standing: 3,
            }
        );
        frame.bowl(pins(3)).expect("spare on fill ball");
        assert_eq!(frame.frame_total(), 20);
    }
}
