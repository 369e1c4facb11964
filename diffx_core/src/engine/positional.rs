//! Positional sequence alignment (spec §4.3, default regime). Align by
//! index; trailing elements of the longer side become `Added`/`Removed`.
//! No LCS alignment is attempted — see spec §9 for the rationale.

use diffx_value::Value;

use super::Child;

pub(super) fn align<'a>(a: &'a [Value], b: &'a [Value]) -> Vec<Child<'a>> {
    let mut children = Vec::new();
    let common = a.len().min(b.len());

    for i in 0..common {
        children.push(Child::recurse_index(i, &a[i], &b[i]));
    }
    for (i, value) in a.iter().enumerate().skip(common) {
        children.push(Child::removed_index(i, value));
    }
    for (i, value) in b.iter().enumerate().skip(common) {
        children.push(Child::added_index(i, value));
    }

    children
}
