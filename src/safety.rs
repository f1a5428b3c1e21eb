//! Safety screen: the no-go rules checked before any planning happens.

use crate::model::{MissionDescription, Orbit, Verdict};

/// Longest mission accepted in geostationary orbit.
pub const GEO_MAX_DURATION_DAYS: i64 = 180;

/// Screen a mission. Rules are checked in order; the first failure wins.
pub fn check(mission: &MissionDescription) -> Verdict {
    if mission.duration_days <= 0 {
        return Verdict::fail("invalid duration");
    }

    if mission.orbit == Orbit::Geo && mission.duration_days > GEO_MAX_DURATION_DAYS {
        return Verdict::fail("GEO missions limited to 180 days");
    }

    Verdict::pass("safety checks passed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_duration_fails_for_every_orbit() {
        for orbit in ["LEO", "GEO", "MEO", "XYZ"] {
            for days in [0, -1, -365] {
                let verdict = check(&MissionDescription::new(orbit, days));
                assert!(!verdict.ok, "{orbit} / {days}d should fail");
                assert_eq!(verdict.reason, "invalid duration");
            }
        }
    }

    #[test]
    fn geo_capped_at_180_days() {
        assert!(check(&MissionDescription::new("GEO", 180)).ok);

        let verdict = check(&MissionDescription::new("GEO", 181));
        assert!(!verdict.ok);
        assert_eq!(verdict.reason, "GEO missions limited to 180 days");
    }

    #[test]
    fn duration_rule_wins_over_geo_rule() {
        let verdict = check(&MissionDescription::new("GEO", -5));
        assert_eq!(verdict.reason, "invalid duration");
    }

    #[test]
    fn other_orbits_have_no_cap() {
        let verdict = check(&MissionDescription::new("MEO", 400));
        assert!(verdict.ok);
        assert_eq!(verdict.reason, "safety checks passed");

        assert!(check(&MissionDescription::new("XYZ", 10)).ok);
    }
}
