//! Hand-authored page content. Everything here is fixed at build time and
//! only ever read.

use chrono::{NaiveDate, TimeZone};
use log::warn;

use crate::components::category_filter::Categorized;
use crate::config::CHAPTER_TZ;

pub const CHAPTER_NAME: &str = "IEEE Karunya";
pub const CHAPTER_LONG_NAME: &str = "IEEE Student Branch, Karunya University";
pub const CONTACT_EMAIL: &str = "ieee@karunya.edu";
pub const CONTACT_LOCATION: &str = "Karunya University, Coimbatore";
pub const MAIL_DOMAIN: &str = "ieee.org";
pub const LOGO_SRC: &str = "/assets/chapter-logo.svg";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Events", href: "#events" },
    NavLink { name: "Timeline", href: "#timeline" },
    NavLink { name: "Team", href: "#team" },
    NavLink { name: "Contact", href: "#contact" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: 12, suffix: "+", label: "Years Active" },
    Stat { value: 500, suffix: "+", label: "Members" },
    Stat { value: 100, suffix: "+", label: "Events Hosted" },
    Stat { value: 50, suffix: "+", label: "Industry Partners" },
];

/// Pre-formatted figures that are displayed as-is (no counting animation).
pub const HERO_STATS: &[(&str, &str, &str)] = &[
    ("👥", "500+", "Active Members"),
    ("📅", "50+", "Events/Year"),
    ("🏆", "25+", "Awards Won"),
];

pub const CTA_STATS: &[(&str, &str)] = &[
    ("500+", "Active Members"),
    ("50+", "Annual Events"),
    ("100%", "Growth Rate"),
    ("24/7", "Community Support"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_FEATURES: &[Feature] = &[
    Feature {
        icon: "🔌",
        title: "Technical Excellence",
        description: "Hands-on workshops, hackathons, and technical talks from industry experts.",
    },
    Feature {
        icon: "🌐",
        title: "Global Network",
        description: "Connect with IEEE's worldwide community of 400,000+ members across 160 countries.",
    },
    Feature {
        icon: "💡",
        title: "Innovation Hub",
        description: "Transform ideas into reality through projects, research, and startup incubation.",
    },
    Feature {
        icon: "🚀",
        title: "Career Growth",
        description: "Access internships, job opportunities, and mentorship from tech leaders.",
    },
];

pub const SHOWCASE_FEATURES: &[Feature] = &[
    Feature {
        icon: "🔌",
        title: "Cutting-Edge Tech",
        description: "Access to latest technologies and tools",
    },
    Feature {
        icon: "🌐",
        title: "Global Network",
        description: "Connect with 400,000+ IEEE members worldwide",
    },
    Feature {
        icon: "💡",
        title: "Innovation Hub",
        description: "Transform ideas into impactful projects",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventRecord {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

impl Categorized for EventRecord {
    fn category(&self) -> &str {
        self.category
    }
}

pub const EVENT_CATEGORIES: &[&str] = &[
    "Data Structures",
    "Robotics",
    "AI/ML",
    "Cybersecurity",
    "IoT",
    "Web Dev",
];

pub const EVENTS: &[EventRecord] = &[
    EventRecord {
        id: 1,
        title: "DSA Bootcamp Series",
        category: "Data Structures",
        image: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=600&q=80",
        date: "Jan 2024",
        location: "CS Lab",
        description: "Master data structures and algorithms with hands-on coding sessions.",
    },
    EventRecord {
        id: 2,
        title: "RoboWars Championship",
        category: "Robotics",
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=600&q=80",
        date: "Feb 2024",
        location: "Tech Arena",
        description: "Battle bots compete in the ultimate robotics showdown.",
    },
    EventRecord {
        id: 3,
        title: "Deep Learning Workshop",
        category: "AI/ML",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600&q=80",
        date: "Mar 2024",
        location: "AI Lab",
        description: "Dive deep into neural networks and transformer architectures.",
    },
    EventRecord {
        id: 4,
        title: "Ethical Hacking Bootcamp",
        category: "Cybersecurity",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=600&q=80",
        date: "Apr 2024",
        location: "Cyber Lab",
        description: "Learn penetration testing and security fundamentals.",
    },
    EventRecord {
        id: 5,
        title: "Smart Home IoT Project",
        category: "IoT",
        image: "https://images.unsplash.com/photo-1518770660439-4636190af475?w=600&q=80",
        date: "May 2024",
        location: "Electronics Lab",
        description: "Build smart home automation with Arduino and Raspberry Pi.",
    },
    EventRecord {
        id: 6,
        title: "Full-Stack Hackathon",
        category: "Web Dev",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=600&q=80",
        date: "Jun 2024",
        location: "Main Hall",
        description: "48-hour coding marathon with React, Node.js, and cloud deployment.",
    },
    EventRecord {
        id: 7,
        title: "Graph Algorithms Challenge",
        category: "Data Structures",
        image: "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=600&q=80",
        date: "Jul 2024",
        location: "CS Lab",
        description: "Competitive programming focused on graph theory.",
    },
    EventRecord {
        id: 8,
        title: "Drone Building Workshop",
        category: "Robotics",
        image: "https://images.unsplash.com/photo-1473968512647-3e447244af8f?w=600&q=80",
        date: "Aug 2024",
        location: "Maker Space",
        description: "Design and build autonomous drones from scratch.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLinks {
    pub linkedin: &'static str,
    pub twitter: &'static str,
    pub github: &'static str,
}

const PLACEHOLDER_SOCIALS: SocialLinks = SocialLinks {
    linkedin: "#",
    twitter: "#",
    github: "#",
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub social: SocialLinks,
}

impl TeamMember {
    /// Chapter address derived from the member's name: lowercased, spaces
    /// turned into dots.
    pub fn mailto(&self) -> String {
        let local = self.name.to_lowercase().replace(' ', ".");
        format!("mailto:{}@{}", urlencoding::encode(&local), MAIL_DOMAIN)
    }
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Ananya Raj",
        role: "Chairperson",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=300&q=80",
        bio: "Final year CSE, passionate about AI and community building.",
        social: PLACEHOLDER_SOCIALS,
    },
    TeamMember {
        name: "Joel Samuel",
        role: "Vice Chairperson",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=300&q=80",
        bio: "Electronics enthusiast with a flair for IoT innovations.",
        social: PLACEHOLDER_SOCIALS,
    },
    TeamMember {
        name: "Priya Menon",
        role: "Technical Lead",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=300&q=80",
        bio: "Full-stack developer and open source contributor.",
        social: PLACEHOLDER_SOCIALS,
    },
    TeamMember {
        name: "Arun Kumar",
        role: "Secretary",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&q=80",
        bio: "Organizing expert who keeps the chapter running smoothly.",
        social: PLACEHOLDER_SOCIALS,
    },
    TeamMember {
        name: "Meera Thomas",
        role: "Treasurer",
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=300&q=80",
        bio: "MBA student with expertise in financial management.",
        social: PLACEHOLDER_SOCIALS,
    },
    TeamMember {
        name: "Rahul Das",
        role: "Events Coordinator",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=300&q=80",
        bio: "Creative mind behind our most successful events.",
        social: PLACEHOLDER_SOCIALS,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2012",
        title: "Chapter Founded",
        description: "IEEE Student Branch established at Karunya University with 25 founding members.",
        icon: "🚀",
    },
    Milestone {
        year: "2015",
        title: "First National Recognition",
        description: "Awarded Best Emerging Student Branch in IEEE Madras Section.",
        icon: "🏅",
    },
    Milestone {
        year: "2017",
        title: "200 Members Milestone",
        description: "Reached 200+ active members and hosted first international conference.",
        icon: "👥",
    },
    Milestone {
        year: "2019",
        title: "Innovation Hub Launch",
        description: "Established dedicated makerspace and innovation lab for student projects.",
        icon: "⚡",
    },
    Milestone {
        year: "2021",
        title: "Virtual Excellence",
        description: "Successfully transitioned to virtual events, reaching 1000+ participants globally.",
        icon: "⭐",
    },
    Milestone {
        year: "2023",
        title: "Regional Champions",
        description: "Won IEEE Region 10 Outstanding Student Branch Award.",
        icon: "🏆",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoClip {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub category: &'static str,
}

pub const VIDEOS: &[VideoClip] = &[
    VideoClip {
        id: 1,
        title: "Server & Network Animation",
        description: "The backbone of our digital infrastructure",
        thumbnail: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&q=80",
        category: "Infrastructure",
    },
    VideoClip {
        id: 2,
        title: "Event Highlight Reel",
        description: "Best moments from IEEE events",
        thumbnail: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&q=80",
        category: "Events",
    },
    VideoClip {
        id: 3,
        title: "IEEE Activities",
        description: "A glimpse into our daily activities",
        thumbnail: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?w=800&q=80",
        category: "Activities",
    },
];

/// An upcoming event whose start is written as a wall-clock time in
/// [`CHAPTER_TZ`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountdownTarget {
    pub name: &'static str,
    pub local: (i32, u32, u32, u32, u32),
}

impl CountdownTarget {
    /// Start of the event as epoch milliseconds, or `None` when the wall-clock
    /// time does not exist (or is ambiguous) in the chapter's time zone.
    pub fn epoch_millis(&self) -> Option<i64> {
        let (year, month, day, hour, minute) = self.local;
        let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
        CHAPTER_TZ
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.timestamp_millis())
    }
}

pub const UPCOMING_EVENTS: &[CountdownTarget] = &[
    CountdownTarget {
        name: "Tech Summit 2027",
        local: (2027, 3, 15, 10, 0),
    },
    CountdownTarget {
        name: "Hackathon Spring",
        local: (2027, 4, 20, 9, 0),
    },
];

/// Upcoming events paired with their resolved start time. Targets that
/// cannot be resolved are dropped with a warning.
pub fn resolved_countdowns() -> Vec<(&'static str, i64)> {
    UPCOMING_EVENTS
        .iter()
        .filter_map(|target| match target.epoch_millis() {
            Some(ms) => Some((target.name, ms)),
            None => {
                warn!("Skipping countdown for {}: start time does not resolve", target.name);
                None
            }
        })
        .collect()
}

pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { name: "About Us", href: "#about" },
    NavLink { name: "Events", href: "#events" },
    NavLink { name: "Team", href: "#team" },
    NavLink { name: "Timeline", href: "#timeline" },
];

pub const RESOURCES: &[NavLink] = &[
    NavLink { name: "IEEE.org", href: "https://ieee.org" },
    NavLink { name: "IEEE Madras Section", href: "#" },
    NavLink { name: "Karunya University", href: "#" },
    NavLink { name: "Student Resources", href: "#" },
];

/// (label, glyph, href)
pub const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("LinkedIn", "in", "#"),
    ("Twitter", "𝕏", "#"),
    ("Instagram", "◎", "#"),
    ("YouTube", "▶", "#"),
    ("GitHub", "⌥", "#"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_event_uses_a_listed_category() {
        for event in EVENTS {
            assert!(
                EVENT_CATEGORIES.contains(&event.category),
                "{} has unknown category {}",
                event.title,
                event.category
            );
        }
    }

    #[test]
    fn event_ids_are_unique() {
        let ids: HashSet<u32> = EVENTS.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), EVENTS.len());
    }

    #[test]
    fn mailto_lowercases_and_dots_the_name() {
        let member = TeamMember {
            name: "Ananya Raj",
            ..TEAM[0]
        };
        assert_eq!(member.mailto(), "mailto:ananya.raj@ieee.org");
    }

    #[test]
    fn countdown_targets_resolve_in_chapter_time_zone() {
        let target = CountdownTarget {
            name: "Midnight IST",
            local: (2027, 1, 1, 5, 30),
        };
        // 05:30 IST is 00:00 UTC.
        assert_eq!(target.epoch_millis(), Some(1_798_761_600_000));
    }

    #[test]
    fn impossible_dates_do_not_resolve() {
        let target = CountdownTarget {
            name: "Nope",
            local: (2027, 2, 30, 9, 0),
        };
        assert_eq!(target.epoch_millis(), None);
    }

    #[test]
    fn all_upcoming_events_resolve() {
        assert_eq!(resolved_countdowns().len(), UPCOMING_EVENTS.len());
    }
}
