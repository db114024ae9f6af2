//! Note name conversion for drum pad addressing.
//!
//! The host numbers octaves so that middle C is C3 (MIDI 60), which puts the
//! common kick-drum pad C1 at MIDI 36. Valid MIDI range is 0 (C-2) to
//! 127 (G8).

/// `in_note` value of a catch-all chain, matched by the wildcard note `"*"`.
pub const CATCH_ALL_NOTE: i64 = -1;

/// The wildcard note name addressing the catch-all group.
pub const WILDCARD_NOTE: &str = "*";

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a note name string into a MIDI note number.
///
/// Format: `<letter><optional accidental><octave>`
/// - Letter: C, D, E, F, G, A, B
/// - Accidental: # (sharp) or b (flat)
/// - Octave: -2 to 8 (C3 = middle C = MIDI 60)
pub fn note_name_to_midi(name: &str) -> Option<u8> {
    let chars: Vec<char> = name.chars().collect();
    if chars.is_empty() {
        return None;
    }

    let base = match chars[0] {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut i = 1;
    let accidental: i32 = if i < chars.len() && chars[i] == '#' {
        i += 1;
        1
    } else if i < chars.len() && chars[i] == 'b' {
        i += 1;
        -1
    } else {
        0
    };

    // Rest should be octave number (possibly negative)
    let octave_str: String = chars[i..].iter().collect();
    let octave: i32 = octave_str.parse().ok()?;

    // C-2 = 0, C1 = 36, C3 = 60
    let midi = (octave + 2) * 12 + base + accidental;

    if !(0..=127).contains(&midi) {
        None
    } else {
        Some(midi as u8)
    }
}

/// Render a MIDI note number as a note name, using sharps.
///
/// Returns `None` outside the MIDI range; the catch-all sentinel is not a
/// note and has no name.
pub fn midi_to_note_name(midi: i64) -> Option<String> {
    if !(0..=127).contains(&midi) {
        return None;
    }
    let name = NOTE_NAMES[(midi % 12) as usize];
    let octave = midi / 12 - 2;
    Some(format!("{name}{octave}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_c() {
        assert_eq!(note_name_to_midi("C3"), Some(60));
    }

    #[test]
    fn c1_kick_pad() {
        assert_eq!(note_name_to_midi("C1"), Some(36));
    }

    #[test]
    fn c_minus_2_floor() {
        assert_eq!(note_name_to_midi("C-2"), Some(0));
    }

    #[test]
    fn g8_ceiling() {
        assert_eq!(note_name_to_midi("G8"), Some(127));
    }

    #[test]
    fn sharps_and_flats() {
        assert_eq!(note_name_to_midi("F#2"), Some(54));
        assert_eq!(note_name_to_midi("Eb1"), Some(39));
        assert_eq!(note_name_to_midi("Bb2"), Some(58));
    }

    #[test]
    fn invalid_names() {
        assert_eq!(note_name_to_midi(""), None);
        assert_eq!(note_name_to_midi("X4"), None);
        assert_eq!(note_name_to_midi("C"), None);
        assert_eq!(note_name_to_midi("C99"), None);
    }

    #[test]
    fn naturals_octave_3() {
        assert_eq!(note_name_to_midi("C3"), Some(60));
        assert_eq!(note_name_to_midi("D3"), Some(62));
        assert_eq!(note_name_to_midi("E3"), Some(64));
        assert_eq!(note_name_to_midi("F3"), Some(65));
        assert_eq!(note_name_to_midi("G3"), Some(67));
        assert_eq!(note_name_to_midi("A3"), Some(69));
        assert_eq!(note_name_to_midi("B3"), Some(71));
    }

    #[test]
    fn names_from_midi() {
        assert_eq!(midi_to_note_name(36).as_deref(), Some("C1"));
        assert_eq!(midi_to_note_name(60).as_deref(), Some("C3"));
        assert_eq!(midi_to_note_name(61).as_deref(), Some("C#3"));
        assert_eq!(midi_to_note_name(0).as_deref(), Some("C-2"));
        assert_eq!(midi_to_note_name(127).as_deref(), Some("G8"));
    }

    #[test]
    fn sentinel_has_no_name() {
        assert_eq!(midi_to_note_name(CATCH_ALL_NOTE), None);
        assert_eq!(midi_to_note_name(128), None);
    }

    #[test]
    fn round_trip_all_notes() {
        for midi in 0..=127i64 {
            let name = midi_to_note_name(midi).unwrap();
            assert_eq!(note_name_to_midi(&name), Some(midi as u8), "{name}");
        }
    }
}
