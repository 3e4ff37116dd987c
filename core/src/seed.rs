//! The three posts an `InMemoryStore` starts with.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::BlogPost;

/// First id handed out by a store initialized from `seed_blogs`.
pub const FIRST_CREATED_ID: u64 = 4;

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn seed_blogs() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "AI in Smart Agriculture".to_string(),
            category: tags(&["AGRICULTURE", "AI", "IOT"]),
            description: "How artificial intelligence is transforming modern farming practices"
                .to_string(),
            date: at(2026, 1, 15, 10, 20, 30),
            cover_image: "https://images.pexels.com/photos/2886937/pexels-photo-2886937.jpeg"
                .to_string(),
            content: [
                "Artificial Intelligence is revolutionizing agriculture by enabling data-driven \
                 farming decisions. Smart sensors, drones, and AI models work together to monitor \
                 crop health, soil conditions, and weather patterns in real time.",
                "Farmers can now predict crop diseases, optimize irrigation, and increase yield \
                 while reducing costs. Machine learning models analyze historical and real-time \
                 data to provide accurate recommendations.",
                "AI-powered agriculture not only improves productivity but also promotes \
                 sustainability. Efficient use of water, fertilizers, and pesticides helps reduce \
                 environmental impact.",
                "As technology advances, AI-driven smart farming will play a crucial role in \
                 ensuring food security for a growing global population.",
            ]
            .join("\n\n"),
        },
        BlogPost {
            id: 2,
            title: "Full Stack Development Trends".to_string(),
            category: tags(&["WEB", "TECH"]),
            description: "Key technologies shaping full stack development in 2026".to_string(),
            date: at(2026, 1, 14, 15, 45, 0),
            cover_image: "https://images.pexels.com/photos/3735218/pexels-photo-3735218.jpeg"
                .to_string(),
            content: [
                "Full stack development continues to evolve rapidly with the rise of modern \
                 frameworks and cloud services. Technologies like React, Next.js, Node.js, and \
                 serverless architectures are becoming industry standards.",
                "Developers are focusing more on performance, scalability, and user experience. \
                 Tools such as Firebase, AWS, and Docker simplify backend management and \
                 deployment.",
                "Security and API-first design are also gaining importance as applications \
                 become more interconnected.",
                "In 2026, successful full stack developers are those who can adapt quickly, \
                 learn continuously, and build end-to-end solutions efficiently.",
            ]
            .join("\n\n"),
        },
        BlogPost {
            id: 3,
            title: "IoT and Smart Cities".to_string(),
            category: tags(&["IOT", "SMART CITY"]),
            description: "Building intelligent cities using connected devices and data".to_string(),
            date: at(2026, 1, 13, 9, 10, 0),
            cover_image: "https://images.pexels.com/photos/4050315/pexels-photo-4050315.jpeg"
                .to_string(),
            content: [
                "Smart cities leverage IoT devices to improve urban living. Sensors collect \
                 real-time data on traffic, air quality, energy usage, and public infrastructure.",
                "This data helps city administrators make informed decisions, reduce congestion, \
                 and improve public services. Smart lighting, waste management, and surveillance \
                 systems enhance efficiency and safety.",
                "Citizen engagement platforms allow people to report issues directly, increasing \
                 transparency and accountability.",
                "With continued innovation, IoT-driven smart cities will become more sustainable, \
                 connected, and citizen-friendly.",
            ]
            .join("\n\n"),
        },
    ]
}
