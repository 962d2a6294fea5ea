//! Demo catalog used when no real backend is wired in. Titles, people, and
//! artwork URLs are invented.

use catalog_models::{
    CastMember, Content, ContentRating, ContentType, Episode, Genre, Language, MaturityLevel,
    NotificationSettings, PlaybackSettings, Season, SubscriptionDetails, SubscriptionPlan, User,
    UserProfile, WatchHistory, WatchlistItem,
};
use chrono::{Duration, Utc};
use std::collections::HashMap;

use crate::memory::CatalogState;

pub fn demo_catalog() -> CatalogState {
    let genres = demo_genres();
    let contents = demo_contents(&genres);
    let seasons = demo_seasons(&contents);
    let users = demo_users();
    let profiles = demo_profiles(&users[0].id);
    let watchlist = demo_watchlist(&profiles, &contents);
    let history = demo_history(&profiles, &contents);

    CatalogState {
        featured_id: Some("c-1".to_string()),
        contents,
        genres,
        seasons,
        users,
        profiles,
        watchlist,
        history,
        notification_settings: HashMap::new(),
        playback_settings: HashMap::new(),
        recent_searches: vec!["heist".to_string(), "space".to_string()],
    }
}

fn demo_genres() -> Vec<Genre> {
    [
        ("g-1", "Action", "action"),
        ("g-2", "Comedy", "comedy"),
        ("g-3", "Drama", "drama"),
        ("g-4", "Sci-Fi", "sci-fi"),
        ("g-5", "Horror", "horror"),
        ("g-6", "Thriller", "thriller"),
        ("g-7", "Romance", "romance"),
        ("g-8", "Crime", "crime"),
        ("g-9", "Fantasy", "fantasy"),
        ("g-10", "Family", "family"),
    ]
    .into_iter()
    .map(|(id, name, slug)| Genre {
        id: id.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

struct TitleSeed {
    id: &'static str,
    title: &'static str,
    content_type: ContentType,
    year: u32,
    rating: ContentRating,
    duration: u32,
    genres: &'static [&'static str],
    cast: &'static [(&'static str, &'static str)],
    director: Option<&'static str>,
    average_rating: f32,
    total_ratings: u32,
    added_days_ago: i64,
}

fn demo_contents(genres: &[Genre]) -> Vec<Content> {
    use ContentRating::*;
    use ContentType::*;

    let seeds = [
        TitleSeed { id: "c-1", title: "Gravity Well", content_type: Movie, year: 2024, rating: Pg13, duration: 128, genres: &["sci-fi", "thriller"], cast: &[("Mara Ellis", "Dr. Ren Okafor"), ("Tomas Ried", "Commander Vale")], director: Some("Ana Castellan"), average_rating: 4.6, total_ratings: 18423, added_days_ago: 12 },
        TitleSeed { id: "c-2", title: "The Ledger", content_type: Series, year: 2023, rating: TvMa, duration: 52, genres: &["crime", "drama"], cast: &[("Jonah Pryce", "Victor Hale"), ("Sela Kim", "Detective Aru")], director: None, average_rating: 4.8, total_ratings: 31204, added_days_ago: 90 },
        TitleSeed { id: "c-3", title: "Midnight Cartographers", content_type: Series, year: 2024, rating: Tv14, duration: 47, genres: &["fantasy", "drama"], cast: &[("Iris Vantour", "Pell"), ("Dmitri Sokol", "The Surveyor")], director: None, average_rating: 4.3, total_ratings: 12873, added_days_ago: 8 },
        TitleSeed { id: "c-4", title: "Last Harvest", content_type: Documentary, year: 2022, rating: TvPg, duration: 96, genres: &["drama"], cast: &[], director: Some("Wren Halloway"), average_rating: 4.1, total_ratings: 4211, added_days_ago: 400 },
        TitleSeed { id: "c-5", title: "Copper Canyon", content_type: Movie, year: 2021, rating: R, duration: 141, genres: &["action", "crime"], cast: &[("Del Moreno", "Ray Ibarra"), ("Katya Lindqvist", "Sheriff Dunn")], director: Some("P. J. Okonkwo"), average_rating: 3.9, total_ratings: 22145, added_days_ago: 600 },
        TitleSeed { id: "c-6", title: "Sleepwalker Protocol", content_type: Movie, year: 2024, rating: Pg13, duration: 117, genres: &["sci-fi", "action"], cast: &[("Mara Ellis", "Unit 7"), ("Coen Brandt", "Dr. Lyle")], director: Some("Sofia Meyer"), average_rating: 4.0, total_ratings: 15930, added_days_ago: 21 },
        TitleSeed { id: "c-7", title: "The Long Thaw", content_type: Documentary, year: 2023, rating: TvG, duration: 88, genres: &["drama", "family"], cast: &[], director: Some("Bea Ortiz"), average_rating: 4.5, total_ratings: 6120, added_days_ago: 150 },
        TitleSeed { id: "c-8", title: "Vows and Vices", content_type: Series, year: 2022, rating: TvMa, duration: 44, genres: &["romance", "drama"], cast: &[("Lina Abebe", "Noor"), ("Marco Villar", "Teo")], director: None, average_rating: 3.7, total_ratings: 19877, added_days_ago: 320 },
        TitleSeed { id: "c-9", title: "Static", content_type: Movie, year: 2023, rating: R, duration: 102, genres: &["horror", "thriller"], cast: &[("Juno Marsh", "Edie"), ("Ferd Aldana", "The Caller")], director: Some("H. R. Voss"), average_rating: 3.4, total_ratings: 9870, added_days_ago: 200 },
        TitleSeed { id: "c-10", title: "Paper Lanterns", content_type: Movie, year: 2020, rating: Pg, duration: 94, genres: &["family", "fantasy"], cast: &[("Yui Tanaka", "Hana"), ("Sam Okafor", "The Lantern Keeper")], director: Some("Kenji Mori"), average_rating: 4.4, total_ratings: 8754, added_days_ago: 800 },
        TitleSeed { id: "c-11", title: "Checkmate City", content_type: Series, year: 2024, rating: Tv14, duration: 39, genres: &["crime", "thriller"], cast: &[("Odette Laurent", "Mayor Finch"), ("Gil Harmon", "Tally")], director: None, average_rating: 4.2, total_ratings: 14422, added_days_ago: 30 },
        TitleSeed { id: "c-12", title: "Driftwood", content_type: Movie, year: 2019, rating: Pg13, duration: 109, genres: &["drama", "romance"], cast: &[("Cass Delgado", "June"), ("Ansel Reyes", "Martin")], director: Some("Tilda Brook"), average_rating: 3.8, total_ratings: 11240, added_days_ago: 1200 },
        TitleSeed { id: "c-13", title: "Iron Orchard", content_type: Series, year: 2021, rating: TvMa, duration: 55, genres: &["drama", "crime"], cast: &[("Ward Kessler", "Abel Crane")], director: None, average_rating: 4.7, total_ratings: 27631, added_days_ago: 500 },
        TitleSeed { id: "c-14", title: "Comet Season", content_type: Movie, year: 2024, rating: Pg, duration: 98, genres: &["family", "sci-fi"], cast: &[("Pia Novak", "Lou"), ("Ezra Whitfield", "Grandpa Joe")], director: Some("Marta Silva"), average_rating: 4.0, total_ratings: 5321, added_days_ago: 5 },
        TitleSeed { id: "c-15", title: "The Quiet Floor", content_type: Movie, year: 2023, rating: R, duration: 112, genres: &["thriller", "drama"], cast: &[("Noa Berg", "Ines"), ("Ralph Odum", "Mr. Said")], director: Some("Ana Castellan"), average_rating: 4.1, total_ratings: 13765, added_days_ago: 180 },
        TitleSeed { id: "c-16", title: "Hexwood Lane", content_type: Series, year: 2023, rating: TvY7, duration: 24, genres: &["family", "fantasy"], cast: &[("Remy Osei", "Birch (voice)")], director: None, average_rating: 4.3, total_ratings: 3980, added_days_ago: 250 },
        TitleSeed { id: "c-17", title: "Night Shift at the Odeon", content_type: Movie, year: 2022, rating: Pg13, duration: 101, genres: &["comedy", "romance"], cast: &[("Frida Holm", "Pip"), ("Omar Castille", "Lionel")], director: Some("D. Q. Ferrer"), average_rating: 3.6, total_ratings: 10233, added_days_ago: 380 },
        TitleSeed { id: "c-18", title: "Salt Road", content_type: Documentary, year: 2024, rating: TvPg, duration: 79, genres: &["drama"], cast: &[], director: Some("Yared Mulu"), average_rating: 4.6, total_ratings: 2875, added_days_ago: 14 },
        TitleSeed { id: "c-19", title: "The Anthill Job", content_type: Movie, year: 2024, rating: Pg13, duration: 124, genres: &["action", "comedy", "crime"], cast: &[("Gus Ferraro", "Mickey Blue"), ("Thea Lindgren", "Vic")], director: Some("Ben Arcari"), average_rating: 4.2, total_ratings: 20981, added_days_ago: 18 },
        TitleSeed { id: "c-20", title: "Winterlight", content_type: Series, year: 2020, rating: TvPg, duration: 50, genres: &["fantasy", "romance"], cast: &[("Elin Stray", "Queen Maret"), ("Caspian Holt", "Fen")], director: None, average_rating: 3.9, total_ratings: 16770, added_days_ago: 950 },
        TitleSeed { id: "c-21", title: "Proof of Life on Mars", content_type: Documentary, year: 2023, rating: TvG, duration: 92, genres: &["sci-fi"], cast: &[], director: Some("Cleo Banks"), average_rating: 4.2, total_ratings: 7540, added_days_ago: 220 },
        TitleSeed { id: "c-22", title: "Bonebreaker Ridge", content_type: Movie, year: 2021, rating: R, duration: 133, genres: &["action", "thriller"], cast: &[("Rex Calloway", "Sgt. Boone"), ("Ida Moss", "Harlan")], director: Some("V. Petrov"), average_rating: 3.5, total_ratings: 18004, added_days_ago: 700 },
        TitleSeed { id: "c-23", title: "The Understudy", content_type: Movie, year: 2024, rating: Pg13, duration: 107, genres: &["drama", "comedy"], cast: &[("Opal Reiner", "Margot"), ("Hal Iverson", "The Director")], director: Some("Tilda Brook"), average_rating: 4.4, total_ratings: 9120, added_days_ago: 9 },
        TitleSeed { id: "c-24", title: "Redline Republic", content_type: Series, year: 2022, rating: Tv14, duration: 42, genres: &["action", "sci-fi"], cast: &[("Kato Brand", "Axle"), ("June Okoye", "Magistrate Vey")], director: None, average_rating: 3.8, total_ratings: 21560, added_days_ago: 430 },
        TitleSeed { id: "c-25", title: "A Table for Ghosts", content_type: Movie, year: 2023, rating: Pg, duration: 89, genres: &["comedy", "fantasy", "family"], cast: &[("Bram Feld", "Uncle Wen"), ("Suki Aoki", "Mirabel")], director: Some("Kenji Mori"), average_rating: 4.0, total_ratings: 6843, added_days_ago: 160 },
        TitleSeed { id: "c-26", title: "Fathoms", content_type: Series, year: 2024, rating: TvMa, duration: 58, genres: &["horror", "drama"], cast: &[("Isla Navarro", "Dr. Wye"), ("Piotr Hess", "The Diver")], director: None, average_rating: 4.5, total_ratings: 17322, added_days_ago: 25 },
        TitleSeed { id: "c-27", title: "Penny Arcade Kings", content_type: Movie, year: 2020, rating: Pg13, duration: 115, genres: &["comedy", "drama"], cast: &[("Moe Tran", "Denny"), ("Gracie Bellamy", "Flo")], director: Some("D. Q. Ferrer"), average_rating: 3.3, total_ratings: 7210, added_days_ago: 1100 },
        TitleSeed { id: "c-28", title: "The Silent Meridian", content_type: Movie, year: 2024, rating: R, duration: 136, genres: &["thriller", "crime"], cast: &[("Vera Stone", "Agent Calloway"), ("Nils Berg", "Meridian")], director: Some("P. J. Okonkwo"), average_rating: 4.7, total_ratings: 25412, added_days_ago: 3 },
        TitleSeed { id: "c-29", title: "Sprout and the Storm", content_type: Movie, year: 2022, rating: G, duration: 84, genres: &["family"], cast: &[("Ada Lune", "Sprout (voice)")], director: Some("Marta Silva"), average_rating: 4.3, total_ratings: 5980, added_days_ago: 450 },
        TitleSeed { id: "c-30", title: "Glasshouse", content_type: Series, year: 2023, rating: TvMa, duration: 49, genres: &["thriller", "drama"], cast: &[("Faye Donnelly", "Ruth"), ("Leo Marchetti", "Father Quinn")], director: None, average_rating: 4.1, total_ratings: 15208, added_days_ago: 110 },
    ];

    let trending = ["c-1", "c-3", "c-11", "c-19", "c-26", "c-28"];
    // Hero-slot taglines; titles that can land in the featured slot carry one
    let taglines = [
        ("c-1", "A rescue mission at the edge of a collapsing orbit."),
        ("c-2", "Every debt in this city is written down somewhere."),
        ("c-28", "The quietest man in the room is the one to watch."),
    ];
    let originals = ["c-2", "c-3", "c-8", "c-11", "c-16", "c-24", "c-26", "c-30"];
    let top10: [(&str, u32); 10] = [
        ("c-28", 1),
        ("c-2", 2),
        ("c-1", 3),
        ("c-13", 4),
        ("c-26", 5),
        ("c-19", 6),
        ("c-23", 7),
        ("c-3", 8),
        ("c-11", 9),
        ("c-18", 10),
    ];

    seeds
        .into_iter()
        .map(|seed| {
            let added_at = Utc::now() - Duration::days(seed.added_days_ago);
            let rank = top10.iter().find(|(id, _)| *id == seed.id).map(|(_, r)| *r);
            Content {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                original_title: None,
                content_type: seed.content_type,
                description: format!(
                    "{} ({}). A {} title from the demo catalog.",
                    seed.title,
                    seed.year,
                    seed.genres.join("/")
                ),
                short_description: taglines
                    .iter()
                    .find(|(id, _)| *id == seed.id)
                    .map(|(_, t)| t.to_string()),
                release_year: seed.year,
                rating: seed.rating,
                duration_minutes: seed.duration,
                poster_url: format!("https://img.binge.example/{}/poster.jpg", seed.id),
                backdrop_url: format!("https://img.binge.example/{}/backdrop.jpg", seed.id),
                trailer_url: None,
                genres: seed
                    .genres
                    .iter()
                    .map(|slug| {
                        genres
                            .iter()
                            .find(|g| g.slug == *slug)
                            .cloned()
                            .expect("seed references a known genre slug")
                    })
                    .collect(),
                cast: seed
                    .cast
                    .iter()
                    .enumerate()
                    .map(|(i, (name, character))| CastMember {
                        id: format!("{}-cast-{}", seed.id, i + 1),
                        name: name.to_string(),
                        character: character.to_string(),
                        photo_url: None,
                    })
                    .collect(),
                director: seed.director.map(str::to_string),
                average_rating: seed.average_rating,
                total_ratings: seed.total_ratings,
                match_percentage: None,
                is_new: seed.added_days_ago <= 30,
                is_trending: trending.contains(&seed.id),
                is_original: originals.contains(&seed.id),
                is_top10: rank.is_some(),
                top10_rank: rank,
                added_at,
            }
        })
        .collect()
}

fn demo_seasons(contents: &[Content]) -> HashMap<String, Vec<Season>> {
    let mut seasons = HashMap::new();
    for content in contents.iter().filter(|c| c.content_type == ContentType::Series) {
        let count = if content.total_ratings > 20_000 { 3 } else { 2 };
        let series: Vec<Season> = (1..=count)
            .map(|n| {
                let season_id = format!("{}-s{}", content.id, n);
                Season {
                    id: season_id.clone(),
                    series_id: content.id.clone(),
                    season_number: n,
                    title: format!("Season {}", n),
                    description: None,
                    release_year: content.release_year + n - 1,
                    episodes: (1..=6)
                        .map(|e| Episode {
                            id: format!("{}-e{}", season_id, e),
                            season_id: season_id.clone(),
                            episode_number: e,
                            title: format!("Episode {}", e),
                            description: format!("{}, chapter {}.", content.title, e),
                            duration_minutes: content.duration_minutes,
                            thumbnail_url: format!(
                                "https://img.binge.example/{}/thumb.jpg",
                                season_id
                            ),
                            video_url: None,
                        })
                        .collect(),
                }
            })
            .collect();
        seasons.insert(content.id.clone(), series);
    }
    seasons
}

fn demo_users() -> Vec<User> {
    vec![User {
        id: "user-1".to_string(),
        email: "demo@binge.example".to_string(),
        name: "Demo Household".to_string(),
        subscription: SubscriptionPlan::Standard,
        created_at: Utc::now() - Duration::days(730),
    }]
}

fn demo_profiles(user_id: &str) -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: "profile-1".to_string(),
            user_id: user_id.to_string(),
            name: "Alex".to_string(),
            avatar_url: "avatar://classic-red".to_string(),
            avatar_color: "#e50914".to_string(),
            is_kids_profile: false,
            language: "en".to_string(),
            maturity_level: ContentRating::TvMa,
            auto_play_next: true,
            auto_play_previews: true,
        },
        UserProfile {
            id: "profile-2".to_string(),
            user_id: user_id.to_string(),
            name: "Sam".to_string(),
            avatar_url: "avatar://classic-blue".to_string(),
            avatar_color: "#1f6feb".to_string(),
            is_kids_profile: false,
            language: "en".to_string(),
            maturity_level: ContentRating::Tv14,
            auto_play_next: true,
            auto_play_previews: false,
        },
        UserProfile {
            id: "profile-3".to_string(),
            user_id: user_id.to_string(),
            name: "Kids".to_string(),
            avatar_url: "avatar://kids-yellow".to_string(),
            avatar_color: "#f5c518".to_string(),
            is_kids_profile: true,
            language: "en".to_string(),
            maturity_level: ContentRating::TvY,
            auto_play_next: true,
            auto_play_previews: false,
        },
    ]
}

fn demo_watchlist(profiles: &[UserProfile], contents: &[Content]) -> Vec<WatchlistItem> {
    let picks = [
        (&profiles[0], "c-2", 40),
        (&profiles[0], "c-28", 2),
        (&profiles[0], "c-15", 12),
        (&profiles[1], "c-8", 60),
        (&profiles[1], "c-23", 4),
    ];
    picks
        .iter()
        .enumerate()
        .filter(|(_, (_, content_id, _))| contents.iter().any(|c| c.id == *content_id))
        .map(|(i, (profile, content_id, days_ago))| WatchlistItem {
            id: format!("wl-seed-{}", i + 1),
            profile_id: profile.id.clone(),
            content_id: content_id.to_string(),
            added_at: Utc::now() - Duration::days(*days_ago),
        })
        .collect()
}

fn demo_history(profiles: &[UserProfile], contents: &[Content]) -> Vec<WatchHistory> {
    let picks = [
        (&profiles[0], "c-2", 65_u8, 1_i64),
        (&profiles[0], "c-5", 100, 20),
        (&profiles[0], "c-26", 15, 3),
        (&profiles[1], "c-8", 45, 2),
        (&profiles[2], "c-16", 80, 1),
    ];
    picks
        .iter()
        .enumerate()
        .filter(|(_, (_, content_id, _, _))| contents.iter().any(|c| c.id == *content_id))
        .map(|(i, (profile, content_id, progress, days_ago))| WatchHistory {
            id: format!("wh-seed-{}", i + 1),
            profile_id: profile.id.clone(),
            content_id: content_id.to_string(),
            watched_at: Utc::now() - Duration::days(*days_ago),
            progress: *progress,
            current_episode_id: None,
            current_season_number: None,
            current_episode_number: None,
        })
        .collect()
}

pub fn subscription_plans() -> Vec<SubscriptionDetails> {
    vec![
        SubscriptionDetails {
            plan: SubscriptionPlan::Basic,
            plan_name: "Basic".to_string(),
            price: "$9.99/month".to_string(),
            features: vec![
                "Watch on 1 device at a time".to_string(),
                "720p resolution".to_string(),
                "Download on 1 device".to_string(),
            ],
            max_screens: 1,
            video_quality: "720p".to_string(),
        },
        SubscriptionDetails {
            plan: SubscriptionPlan::Standard,
            plan_name: "Standard".to_string(),
            price: "$15.49/month".to_string(),
            features: vec![
                "Watch on 2 devices at a time".to_string(),
                "1080p resolution".to_string(),
                "Download on 2 devices".to_string(),
            ],
            max_screens: 2,
            video_quality: "1080p".to_string(),
        },
        SubscriptionDetails {
            plan: SubscriptionPlan::Premium,
            plan_name: "Premium".to_string(),
            price: "$22.99/month".to_string(),
            features: vec![
                "Watch on 4 devices at a time".to_string(),
                "4K + HDR".to_string(),
                "Download on 6 devices".to_string(),
                "Spatial Audio".to_string(),
            ],
            max_screens: 4,
            video_quality: "4K + HDR".to_string(),
        },
    ]
}

pub fn languages() -> Vec<Language> {
    [
        ("en", "English"),
        ("es", "Español"),
        ("fr", "Français"),
        ("de", "Deutsch"),
        ("ja", "日本語"),
        ("ko", "한국어"),
        ("zh", "中文"),
        ("th", "ไทย"),
        ("pt", "Português"),
        ("it", "Italiano"),
    ]
    .into_iter()
    .map(|(code, name)| Language {
        code: code.to_string(),
        name: name.to_string(),
    })
    .collect()
}

pub fn maturity_levels() -> Vec<MaturityLevel> {
    [
        (ContentRating::TvY, "All Children"),
        (ContentRating::TvY7, "Older Children"),
        (ContentRating::TvG, "General Audience"),
        (ContentRating::TvPg, "Parental Guidance"),
        (ContentRating::Tv14, "Parents Strongly Cautioned"),
        (ContentRating::TvMa, "Mature Audiences Only"),
    ]
    .into_iter()
    .map(|(rating, description)| MaturityLevel {
        rating,
        description: description.to_string(),
    })
    .collect()
}
