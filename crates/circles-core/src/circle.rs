//! Circle configuration bitmask.
//!
//! A circle's behavior is a combination of configuration bits carried in the
//! event parameters as a plain integer. The rendering pipeline only branches
//! on [`CFG_INVITE`] and [`CFG_REQUEST`]; the remaining bits are part of the
//! domain vocabulary and documented for completeness.

/// Single-user circle (personal scope, exactly one member).
pub const CFG_SINGLE: u32 = 1;
/// Personal circle, owned and only visible to its owner.
pub const CFG_PERSONAL: u32 = 2;
/// System circle, managed by the platform.
pub const CFG_SYSTEM: u32 = 4;
/// Circle is listed/visible to non-members.
pub const CFG_VISIBLE: u32 = 8;
/// Anyone can join without approval.
pub const CFG_OPEN: u32 = 16;
/// Joining requires accepting an invitation.
pub const CFG_INVITE: u32 = 32;
/// Joining requires a membership request confirmed by a moderator.
pub const CFG_REQUEST: u32 = 64;
/// Members can invite their contacts.
pub const CFG_FRIEND: u32 = 128;

/// Whether `config` has the given bit set.
#[must_use]
pub fn has_config(config: u32, bit: u32) -> bool {
    config & bit != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_are_distinct_powers_of_two() {
        let bits = [
            CFG_SINGLE,
            CFG_PERSONAL,
            CFG_SYSTEM,
            CFG_VISIBLE,
            CFG_OPEN,
            CFG_INVITE,
            CFG_REQUEST,
            CFG_FRIEND,
        ];
        for (i, a) in bits.iter().enumerate() {
            assert_eq!(a.count_ones(), 1);
            for b in &bits[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn has_config_checks_single_bit() {
        let config = CFG_VISIBLE | CFG_INVITE;
        assert!(has_config(config, CFG_INVITE));
        assert!(!has_config(config, CFG_REQUEST));
        assert!(!has_config(0, CFG_INVITE));
    }
}
