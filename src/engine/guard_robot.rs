use texting_robots::Robot;

enum Rules {
    AllowAll,
    DisallowAll,
    Robot(Robot),
}

/// Robots.txt rules for one company website.
pub struct GuardRobot {
    rules: Rules,
}

impl GuardRobot {
    /// Used when robots.txt is ignored, missing or could not be fetched.
    pub fn allow_all() -> Self {
        Self { rules: Rules::AllowAll }
    }

    /// Used when robots.txt access itself is refused (401/403).
    pub fn disallow_all() -> Self {
        Self { rules: Rules::DisallowAll }
    }

    /// Parse a robots.txt body for `bot_name`. Unparseable files allow
    /// everything.
    pub fn parse(bot_name: &str, text: &str) -> Self {
        match Robot::new(bot_name, text.as_bytes()) {
            Ok(robot) => Self { rules: Rules::Robot(robot) },
            Err(e) => {
                log::debug!("unparseable robots.txt: {}", e);
                Self::allow_all()
            }
        }
    }

    /// Rules for a robots.txt response with the given status.
    pub fn from_response(bot_name: &str, status: u16, text: &str) -> Self {
        match status {
            200 => Self::parse(bot_name, text),
            401 | 403 => Self::disallow_all(),
            _ => Self::allow_all(),
        }
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        match &self.rules {
            Rules::AllowAll => true,
            Rules::DisallowAll => false,
            Rules::Robot(robot) => robot.allowed(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disallowed_paths_are_refused() {
        let robots = "User-agent: *\nDisallow: /team\n";
        let guard = GuardRobot::parse("FounderFinderBot", robots);
        assert!(!guard.is_allowed("https://example.com/team"));
        assert!(guard.is_allowed("https://example.com/about"));
    }

    #[test]
    fn rules_for_other_agents_do_not_apply() {
        let robots = "User-agent: OtherBot\nDisallow: /\n";
        let guard = GuardRobot::parse("FounderFinderBot", robots);
        assert!(guard.is_allowed("https://example.com/about"));
    }

    #[test]
    fn response_status_decides_rules() {
        let robots = "User-agent: *\nDisallow: /\n";
        assert!(!GuardRobot::from_response("FounderFinderBot", 200, robots)
            .is_allowed("https://example.com/about"));
        assert!(!GuardRobot::from_response("FounderFinderBot", 403, "")
            .is_allowed("https://example.com/about"));
        assert!(GuardRobot::from_response("FounderFinderBot", 404, robots)
            .is_allowed("https://example.com/about"));
        assert!(GuardRobot::allow_all().is_allowed("https://example.com/anything"));
    }
}
