//! Lock-aware repair of an ordered chain of values.
//!
//! Both the UBI amounts (child <= youth <= adult <= senior) and the age
//! cutoffs (child < youth < senior) are chains where each value must sit at
//! least `gap` above its upstream neighbour. The rules are the same for both:
//!
//! - neither side locked: raise the downstream value
//! - one side locked: move the unlocked side to meet it
//! - both locked: leave them and report a lock conflict
//!
//! A forward pass fixes each pair left to right. Lowering an upstream value
//! can break the pair before it, so a backward pass then pulls those values
//! down in turn.

use super::violation::{ConstraintViolation, ViolationKind};

#[derive(Debug, Clone, Copy)]
pub(crate) struct ChainLink {
    pub name: &'static str,
    pub value: f64,
    pub locked: bool,
}

impl ChainLink {
    pub fn new(name: &'static str, value: f64, locked: bool) -> Self {
        Self { name, value, locked }
    }
}

/// Clamp an unlocked link into `[min, max]`
pub(crate) fn clamp_unlocked(
    link: &mut ChainLink,
    min: f64,
    max: f64,
    label: &str,
    violations: &mut Vec<ConstraintViolation>,
) {
    if link.locked {
        return;
    }

    let corrected = link.value.max(min).min(max);
    if corrected != link.value {
        let message = if link.value < min {
            format!("{} {} cannot be less than {}", link.name, label, min)
        } else {
            format!("{} {} cannot exceed {}", link.name, label, max)
        };
        violations.push(ConstraintViolation {
            kind: ViolationKind::Range,
            field: link.name.to_string(),
            message,
            original_value: link.value,
            corrected_value: corrected,
        });
        link.value = corrected;
    }
}

pub(crate) fn enforce_order(
    links: &mut [ChainLink],
    gap: f64,
    label: &str,
    violations: &mut Vec<ConstraintViolation>,
) {
    for i in 1..links.len() {
        if !violated(links, i, gap) {
            continue;
        }
        if !links[i].locked {
            raise_downstream(links, i, gap, label, violations);
        } else if !links[i - 1].locked {
            lower_upstream(links, i, gap, label, violations);
        }
    }

    for i in (1..links.len()).rev() {
        if !violated(links, i, gap) {
            continue;
        }
        if !links[i - 1].locked {
            lower_upstream(links, i, gap, label, violations);
        } else if !links[i].locked {
            raise_downstream(links, i, gap, label, violations);
        }
    }

    for i in 1..links.len() {
        if violated(links, i, gap) {
            log::warn!(
                "Unresolvable {} ordering: {} = {} vs {} = {}",
                label, links[i - 1].name, links[i - 1].value, links[i].name, links[i].value
            );
            violations.push(ConstraintViolation {
                kind: ViolationKind::LockConflict,
                field: format!("{}/{}", links[i - 1].name, links[i].name),
                message: format!(
                    "{} {} and {} {} cannot be ordered without moving a locked value",
                    links[i - 1].name, label, links[i].name, label
                ),
                original_value: links[i - 1].value,
                corrected_value: links[i - 1].value,
            });
        }
    }
}

fn violated(links: &[ChainLink], i: usize, gap: f64) -> bool {
    links[i].value < links[i - 1].value + gap
}

fn raise_downstream(
    links: &mut [ChainLink],
    i: usize,
    gap: f64,
    label: &str,
    violations: &mut Vec<ConstraintViolation>,
) {
    let target = links[i - 1].value + gap;
    violations.push(ConstraintViolation {
        kind: ViolationKind::Progression,
        field: links[i].name.to_string(),
        message: format!("{} {} increased to maintain progression", links[i].name, label),
        original_value: links[i].value,
        corrected_value: target,
    });
    links[i].value = target;
}

fn lower_upstream(
    links: &mut [ChainLink],
    i: usize,
    gap: f64,
    label: &str,
    violations: &mut Vec<ConstraintViolation>,
) {
    let target = links[i].value - gap;
    let message = if links[i].locked {
        format!("{} {} reduced to respect locked {} {}", links[i - 1].name, label, links[i].name, label)
    } else {
        format!("{} {} reduced to maintain progression", links[i - 1].name, label)
    };
    violations.push(ConstraintViolation {
        kind: ViolationKind::Progression,
        field: links[i - 1].name.to_string(),
        message,
        original_value: links[i - 1].value,
        corrected_value: target,
    });
    links[i - 1].value = target;
}
