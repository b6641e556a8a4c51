//! Fixture records loaded into a freshly seeded catalog.
//!
//! The values are demo data only and can be replaced freely.

use cinecat_core::types::DbId;

use crate::models::director::Director;
use crate::models::movie::Movie;

const DIRECTORS: &[(DbId, &str, &str, u32, bool)] = &[
    (1, "Christopher Nolan", "British", 53, true),
    (2, "Quentin Tarantino", "American", 60, true),
    (3, "Martin Scorsese", "American", 81, true),
    (4, "Steven Spielberg", "American", 76, true),
    (5, "Denis Villeneuve", "Canadian", 56, true),
    (6, "Ridley Scott", "British", 86, true),
    (7, "David Fincher", "American", 61, true),
    (8, "Coen Brothers", "American", 69, true),
    (9, "Paul Thomas Anderson", "American", 54, true),
    (10, "Wes Anderson", "American", 54, true),
    (11, "Guillermo del Toro", "Mexican", 59, true),
    (12, "Alejandro González Iñárritu", "Mexican", 60, true),
    (13, "Alfonso Cuarón", "Mexican", 62, true),
    (14, "Pedro Almodóvar", "Spanish", 74, true),
    (15, "Wong Kar-wai", "Chinese", 65, true),
    (16, "Akira Kurosawa", "Japanese", 88, false),
    (17, "Stanley Kubrick", "American", 70, false),
    (18, "Francis Ford Coppola", "American", 84, true),
    (19, "Woody Allen", "American", 88, true),
    (20, "Tim Burton", "American", 65, true),
    (21, "Jordan Peele", "American", 44, true),
    (22, "Greta Gerwig", "American", 40, true),
    (23, "Chloé Zhao", "Chinese", 42, true),
    (24, "Bong Joon-ho", "South Korean", 54, true),
    (25, "Lulu Wang", "Chinese-American", 41, true),
];

// (id, name, release date, genre, duration, director id)
const MOVIES: &[(DbId, &str, &str, &str, &str, DbId)] = &[
    (1, "Inception", "2010-07-16", "Sci-Fi", "02:28:00", 1),
    (2, "Pulp Fiction", "1994-10-14", "Crime", "02:34:00", 2),
    (3, "The Departed", "2006-10-06", "Crime", "02:31:00", 3),
    (4, "Dune", "2021-10-22", "Sci-Fi", "02:35:00", 5),
    (5, "Blade Runner 2049", "2017-10-06", "Sci-Fi", "02:44:00", 5),
    (6, "Interstellar", "2014-11-07", "Sci-Fi", "02:49:00", 1),
    (7, "The Dark Knight", "2008-07-18", "Action", "02:32:00", 1),
    (8, "Kill Bill: Vol. 1", "2003-10-10", "Action", "01:51:00", 2),
    (9, "Goodfellas", "1990-09-21", "Crime", "02:26:00", 3),
    (10, "Saving Private Ryan", "1998-07-24", "War", "02:49:00", 4),
    (11, "Schindler's List", "1993-12-15", "Drama", "03:15:00", 4),
    (12, "Gladiator", "2000-05-05", "Action", "02:35:00", 6),
    (13, "Fight Club", "1999-10-15", "Drama", "02:19:00", 7),
    (14, "No Country for Old Men", "2007-11-21", "Thriller", "02:02:00", 8),
    (15, "There Will Be Blood", "2007-12-26", "Drama", "02:38:00", 9),
];

pub fn directors() -> Vec<Director> {
    DIRECTORS
        .iter()
        .map(|&(director_id, name, nationality, age, active)| Director {
            director_id,
            name: Some(name.to_string()),
            nationality: Some(nationality.to_string()),
            age: Some(age),
            active: Some(active),
        })
        .collect()
}

/// Fixture movies, with director snapshots taken from `directors`.
pub fn movies(directors: &[Director]) -> Vec<Movie> {
    MOVIES
        .iter()
        .map(
            |&(movies_id, name, release_year, gender, duration, director_id)| Movie {
                movies_id,
                name: Some(name.to_string()),
                release_year: Some(release_year.to_string()),
                gender: Some(gender.to_string()),
                duration: Some(duration.to_string()),
                director_id: Some(director_id),
                director: directors
                    .iter()
                    .find(|d| d.director_id == director_id)
                    .cloned(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_seed_movie_resolves_its_director() {
        let directors = directors();
        let movies = movies(&directors);
        assert_eq!(directors.len(), 25);
        assert_eq!(movies.len(), 15);
        for movie in &movies {
            let snapshot = movie.director.as_ref().expect("seed director exists");
            assert_eq!(Some(snapshot.director_id), movie.director_id);
        }
    }
}
