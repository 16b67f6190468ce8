use crate::data::leaderboard;
use crate::models::ParticipantProfile;
use crate::region::Region;

pub const EMAIL_DOMAIN: &str = "tetrapak.com";

/// Region assigned to names that appear on no leaderboard.
pub const PLACEHOLDER_REGION: Region = Region::Emea;

/// Look a participant up by exact, case-sensitive name across every
/// leaderboard. Unknown names get a placeholder profile rather than an error.
pub fn find_profile(name: &str) -> ParticipantProfile {
    let hit = Region::ALL.iter().find_map(|&region| {
        leaderboard(region)
            .iter()
            .find(|e| e.name == name)
            .map(|e| (region, e))
    });

    match hit {
        Some((region, e)) => ParticipantProfile {
            name: e.name.to_string(),
            country: e.country.to_string(),
            business_unit: e.business_unit.to_string(),
            adoption_rate: e.adoption_rate,
            region,
            info: *region.info(),
        },
        None => ParticipantProfile {
            name: name.to_string(),
            country: "Unknown".to_string(),
            business_unit: "Operations & Digital".to_string(),
            adoption_rate: 0,
            region: PLACEHOLDER_REGION,
            info: *PLACEHOLDER_REGION.info(),
        },
    }
}

/// Two-letter avatar initials: first letters of the first and last words, or
/// the first two characters of a single-word name.
pub fn initials(name: &str) -> String {
    let name = name.trim();
    let parts: Vec<&str> = name.split(' ').collect();
    let letters: String = if parts.len() >= 2 {
        parts[0]
            .chars()
            .take(1)
            .chain(parts[parts.len() - 1].chars().take(1))
            .collect()
    } else {
        name.chars().take(2).collect()
    };
    letters.to_uppercase()
}

/// Synthetic mailbox derived from a display name.
pub fn email(name: &str) -> String {
    let mut local = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                local.push('.');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' {
            local.push(c);
        }
    }
    format!("{local}@{EMAIL_DOMAIN}")
}

impl ParticipantProfile {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn email(&self) -> String {
        email(&self.name)
    }

    /// Text before the first space.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }

    pub fn champions_trained(&self) -> u32 {
        u32::from(self.adoption_rate) * 12 / 10
    }

    pub fn initiatives_led(&self) -> u32 {
        u32::from(self.adoption_rate) / 6
    }
}
