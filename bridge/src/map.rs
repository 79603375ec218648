use crate::{Bridge, Lane};

const CELL_SUCCESS: &str = " O ";
const CELL_FAILURE: &str = " X ";
const CELL_BLANK: &str = "   ";

/// Renders the crossing progress as a two-row map, upper row first.
///
/// Each row is `[` + one three-character cell per bridge tile, joined by
/// `|`, + `]`. For an attempted tile the guessed row shows `O` if the guess
/// matched the true lane and `X` if it did not; the other row stays blank,
/// so the map never reveals the correct lane after a wrong guess. Tiles not
/// yet attempted are blank in both rows.
///
/// Pure: the map is rebuilt from the bridge and move history on every call,
/// so it can never go stale.
pub fn render_map(bridge: &Bridge, moves: &[Lane]) -> String {
    format!(
        "{}\n{}",
        render_row(Lane::Upper, bridge, moves),
        render_row(Lane::Lower, bridge, moves)
    )
}

fn render_row(row: Lane, bridge: &Bridge, moves: &[Lane]) -> String {
    let cells: Vec<&str> = (0..bridge.len())
        .map(|i| match moves.get(i) {
            Some(&guess) if guess == row => {
                if guess == bridge.lane(i) {
                    CELL_SUCCESS
                } else {
                    CELL_FAILURE
                }
            }
            _ => CELL_BLANK,
        })
        .collect();
    format!("[{}]", cells.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bridge_udu() -> Bridge {
        Bridge::from(vec![Lane::Upper, Lane::Lower, Lane::Upper])
    }

    #[test]
    fn empty_history_renders_all_blank() {
        let map = render_map(&bridge_udu(), &[]);
        assert_eq!(map, "[   |   |   ]\n[   |   |   ]");
    }

    #[test]
    fn wrong_guess_marks_the_guessed_row_only() {
        // Tile 1 is really the lower lane; the player guessed upper. The X
        // goes on the upper row and the lower row stays blank.
        let map = render_map(&bridge_udu(), &[Lane::Upper, Lane::Upper]);
        assert_eq!(map, "[ O | X |   ]\n[   |   |   ]");
    }

    #[test]
    fn full_correct_crossing() {
        let map = render_map(&bridge_udu(), &[Lane::Upper, Lane::Lower, Lane::Upper]);
        assert_eq!(map, "[ O |   | O ]\n[   | O |   ]");
    }

    #[test]
    fn wrong_guess_on_the_lower_row() {
        let bridge = Bridge::from(vec![Lane::Upper, Lane::Upper, Lane::Lower]);
        let map = render_map(&bridge, &[Lane::Upper, Lane::Lower]);
        assert_eq!(map, "[ O |   |   ]\n[   | X |   ]");
    }
}
