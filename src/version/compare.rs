use std::cmp::Ordering;

fn is_separator(c: char) -> bool {
    c == '.' || c == '-'
}

/// Next version component: a run of digits or a run of other
/// non-separator characters. Returns "" once the input is exhausted.
fn next_component<'a>(rest: &mut &'a str) -> &'a str {
    let trimmed = rest.trim_start_matches(is_separator);
    let starts_numeric = trimmed.starts_with(|c: char| c.is_ascii_digit());

    let end = trimmed
        .char_indices()
        .find(|&(_, c)| {
            if starts_numeric {
                !c.is_ascii_digit()
            } else {
                c.is_ascii_digit() || is_separator(c)
            }
        })
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    let (component, tail) = trimmed.split_at(end);
    *rest = tail;
    component
}

fn is_numeric(component: &str) -> bool {
    !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit())
}

// Digit runs of any length, compared without overflow.
fn cmp_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn component_lt(c1: &str, c2: &str) -> bool {
    let (n1, n2) = (is_numeric(c1), is_numeric(c2));
    if n1 && n2 {
        cmp_numeric(c1, c2) == Ordering::Less
    } else if c1.is_empty() && n2 {
        true
    } else if c1 == "pre" && c2 != "pre" {
        true
    } else if c2 == "pre" {
        false
    } else if n2 {
        // `2.3a` < `2.3.1`
        true
    } else if n1 {
        false
    } else {
        c1 < c2
    }
}

/// Compare two version strings component by component.
///
/// Separators are `.` and `-`. Numeric components compare numerically,
/// `pre` sorts before everything else and alphabetic components sort
/// before numeric ones.
pub fn compare_versions(v1: &str, v2: &str) -> Ordering {
    let mut p1 = v1;
    let mut p2 = v2;

    while !p1.is_empty() || !p2.is_empty() {
        let c1 = next_component(&mut p1);
        let c2 = next_component(&mut p2);

        if component_lt(c1, c2) {
            return Ordering::Less;
        }
        if component_lt(c2, c1) {
            return Ordering::Greater;
        }
    }

    Ordering::Equal
}
