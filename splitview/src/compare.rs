//! Comparison lifecycle.

use crate::{
    clip::{self, clamp_fraction, ClipSplit, ViewBox},
    SplitViewError,
};

/// Divider position when a comparison starts.
pub const DEFAULT_FRACTION: f64 = 0.5;

/// How many layers a comparison takes.
const PANES: usize = 2;

/// Layer comparison state machine.
///
/// Starts idle, collects up to two distinct layer picks, and only
/// then can run. Stopping hands back a [`Teardown`] naming the panes
/// whose visual state has to be restored.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare<Id> {
    state: State<Id>,
}

#[derive(Debug, Clone, PartialEq)]
enum State<Id> {
    Idle,
    Selecting(Vec<Id>),
    Comparing { left: Id, right: Id, fraction: f64 },
}

/// Panes to restore after a comparison ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teardown<Id> {
    pub left: Id,
    pub right: Id,
}

impl<Id> Default for Compare<Id> {
    fn default() -> Self {
        Self { state: State::Idle }
    }
}

impl<Id> Compare<Id>
where
    Id: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `id` in the pending selection and returns how many
    /// layers are now selected.
    ///
    /// Picking an id that is already selected drops it again, so a
    /// double pick never counts as two layers. A third distinct pick
    /// is rejected, as is any pick while a comparison is running;
    /// neither changes the selection.
    pub fn select(&mut self, id: Id) -> Result<usize, SplitViewError> {
        if matches!(self.state, State::Comparing { .. }) {
            return Err(SplitViewError::AlreadyComparing);
        }

        if let State::Selecting(chosen) = &mut self.state {
            if let Some(at) = chosen.iter().position(|chosen_id| *chosen_id == id) {
                chosen.remove(at);
            } else if chosen.len() == PANES {
                return Err(SplitViewError::TooMany);
            } else {
                chosen.push(id);
            }
            if chosen.is_empty() {
                self.state = State::Idle;
                return Ok(0);
            }
            Ok(chosen.len())
        } else {
            self.state = State::Selecting(vec![id]);
            Ok(1)
        }
    }

    /// Moves to comparing. Requires exactly two distinct selected
    /// layers; anything else is rejected without a state change.
    pub fn start(&mut self) -> Result<(), SplitViewError> {
        match &self.state {
            State::Comparing { .. } => Err(SplitViewError::AlreadyComparing),
            State::Idle => Err(SplitViewError::NeedTwo(0)),
            State::Selecting(chosen) if chosen.len() != PANES => {
                Err(SplitViewError::NeedTwo(chosen.len()))
            }
            State::Selecting(chosen) => {
                let left = chosen[0].clone();
                let right = chosen[1].clone();
                self.state = State::Comparing {
                    left,
                    right,
                    fraction: DEFAULT_FRACTION,
                };
                Ok(())
            }
        }
    }

    /// Ends the comparison (or abandons a pending selection) and
    /// returns to idle.
    ///
    /// The returned teardown names the two panes whose clips and
    /// ordering must be restored; `None` means nothing was running.
    pub fn stop(&mut self) -> Option<Teardown<Id>> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Comparing { left, right, .. } => Some(Teardown { left, right }),
            _ => None,
        }
    }

    /// Repositions the divider and returns the resulting clip state.
    pub fn drag(&mut self, fraction: f64, view: &ViewBox) -> Result<ClipSplit, SplitViewError> {
        if let State::Comparing { fraction: current, .. } = &mut self.state {
            *current = clamp_fraction(fraction);
            Ok(clip::split(view, *current))
        } else {
            Err(SplitViewError::NotComparing)
        }
    }

    /// Clip state for the current divider, or `None` when no
    /// comparison is running.
    pub fn split(&self, view: &ViewBox) -> Option<ClipSplit> {
        if let State::Comparing { fraction, .. } = &self.state {
            Some(clip::split(view, *fraction))
        } else {
            None
        }
    }

    pub fn is_comparing(&self) -> bool {
        matches!(self.state, State::Comparing { .. })
    }

    /// The layers picked so far; empty unless selecting.
    pub fn selection(&self) -> &[Id] {
        match &self.state {
            State::Selecting(chosen) => chosen,
            _ => &[],
        }
    }

    /// The two layers being compared, left pane first.
    pub fn panes(&self) -> Option<(&Id, &Id)> {
        match &self.state {
            State::Comparing { left, right, .. } => Some((left, right)),
            _ => None,
        }
    }

    pub fn fraction(&self) -> Option<f64> {
        match &self.state {
            State::Comparing { fraction, .. } => Some(*fraction),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Compare, Teardown, DEFAULT_FRACTION};
    use crate::{PixelPt, SplitViewError, ViewBox};

    const VIEW: ViewBox = ViewBox {
        width: 1000.0,
        height: 600.0,
        nw: PixelPt { x: 0.0, y: 0.0 },
        se: PixelPt {
            x: 1000.0,
            y: 600.0,
        },
    };

    #[test]
    fn test_one_layer_cannot_start() {
        let mut compare = Compare::new();
        compare.select("aug").unwrap();
        assert_eq!(compare.start(), Err(SplitViewError::NeedTwo(1)));
        assert!(!compare.is_comparing());
    }

    #[test]
    fn test_double_pick_does_not_count_twice() {
        let mut compare = Compare::new();
        assert_eq!(compare.select("aug"), Ok(1));
        assert_eq!(compare.select("aug"), Ok(0));
        assert_eq!(compare.select("aug"), Ok(1));
        assert_eq!(compare.start(), Err(SplitViewError::NeedTwo(1)));
    }

    #[test]
    fn test_third_pick_is_rejected() {
        let mut compare = Compare::new();
        compare.select("aug").unwrap();
        compare.select("sep").unwrap();
        assert_eq!(compare.select("oct"), Err(SplitViewError::TooMany));
        assert_eq!(compare.selection(), ["aug", "sep"]);
    }

    #[test]
    fn test_two_distinct_layers_compare() {
        let mut compare = Compare::new();
        compare.select("aug").unwrap();
        compare.select("sep").unwrap();
        compare.start().unwrap();
        assert!(compare.is_comparing());
        assert_eq!(compare.panes(), Some((&"aug", &"sep")));
        assert_eq!(compare.fraction(), Some(DEFAULT_FRACTION));
    }

    #[test]
    fn test_no_picking_while_running() {
        let mut compare = Compare::new();
        compare.select("aug").unwrap();
        compare.select("sep").unwrap();
        compare.start().unwrap();
        assert_eq!(compare.select("oct"), Err(SplitViewError::AlreadyComparing));
        assert_eq!(compare.start(), Err(SplitViewError::AlreadyComparing));
    }

    #[test]
    fn test_stop_names_both_panes() {
        let mut compare = Compare::new();
        compare.select("aug").unwrap();
        compare.select("sep").unwrap();
        compare.start().unwrap();

        let teardown = compare.stop().unwrap();
        assert_eq!(
            teardown,
            Teardown {
                left: "aug",
                right: "sep"
            }
        );
        assert!(!compare.is_comparing());
        assert!(compare.selection().is_empty());
        assert_eq!(compare.stop(), None);
    }

    #[test]
    fn test_drag_updates_the_clip() {
        let mut compare = Compare::new();
        assert_eq!(
            compare.drag(0.25, &VIEW),
            Err(SplitViewError::NotComparing)
        );

        compare.select("aug").unwrap();
        compare.select("sep").unwrap();
        compare.start().unwrap();

        let clip = compare.drag(0.25, &VIEW).unwrap();
        assert_eq!(clip.handle_x, 250.0);
        assert_eq!(compare.fraction(), Some(0.25));
        assert_eq!(compare.split(&VIEW), Some(clip));
    }

    #[test]
    fn test_drag_clamps() {
        let mut compare = Compare::new();
        compare.select("aug").unwrap();
        compare.select("sep").unwrap();
        compare.start().unwrap();

        compare.drag(7.0, &VIEW).unwrap();
        assert_eq!(compare.fraction(), Some(1.0));
    }
}
