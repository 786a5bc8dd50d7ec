//! Cybersecurity tip deck
//!
//! Shown after each successful defense. Pure presentation data; the
//! simulation stores only an index into this list.

/// The tips, one chosen uniformly at random per successful defense
pub const FACTS: [&str; 10] = [
    "Always use strong, unique passwords for each account.",
    "Enable two-factor authentication whenever possible.",
    "Keep your software and operating systems up to date.",
    "Be cautious when clicking on links or downloading attachments from unknown sources.",
    "Use a reputable antivirus software and keep it updated.",
    "Encrypt sensitive data, especially when transmitting over networks.",
    "Regularly backup your important data.",
    "Be wary of phishing attempts in emails or messages.",
    "Use a VPN when connecting to public Wi-Fi networks.",
    "Educate yourself and others about current cybersecurity threats and best practices.",
];
