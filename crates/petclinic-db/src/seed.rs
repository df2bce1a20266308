//! Sample clinic data loaded into empty databases.

use anyhow::Result;
use petclinic_core::ClinicService;
use sqlx::SqlitePool;

const PET_TYPES: &[(i64, &str)] = &[
    (1, "cat"),
    (2, "dog"),
    (3, "lizard"),
    (4, "snake"),
    (5, "bird"),
    (6, "hamster"),
];

// id, first name, last name, address, city, telephone
const OWNERS: &[(i64, &str, &str, &str, &str, &str)] = &[
    (1, "George", "Franklin", "110 W. Liberty St.", "Madison", "6085551023"),
    (2, "Betty", "Davis", "638 Cardinal Ave.", "Sun Prairie", "6085551749"),
    (3, "Eduardo", "Rodriquez", "2693 Commerce St.", "McFarland", "6085558763"),
    (4, "Harold", "Davis", "563 Friendly St.", "Windsor", "6085553198"),
    (5, "Peter", "McTavish", "2387 S. Fair Way", "Madison", "6085552765"),
    (6, "Jean", "Coleman", "105 N. Lake St.", "Monona", "6085552654"),
    (7, "Jeff", "Black", "1450 Oak Blvd.", "Monona", "6085555387"),
    (8, "Maria", "Escobito", "345 Maple St.", "Madison", "6085557683"),
    (9, "David", "Schroeder", "2749 Blackhawk Trail", "Madison", "6085559435"),
    (10, "Carlos", "Estaban", "2335 Independence La.", "Waunakee", "6085555487"),
];

// id, name, birth date, type id, owner id
const PETS: &[(i64, &str, &str, i64, i64)] = &[
    (1, "Leo", "2010-09-07", 1, 1),
    (2, "Basil", "2012-08-06", 6, 2),
    (3, "Rosy", "2011-04-17", 2, 3),
    (4, "Jewel", "2010-03-07", 2, 3),
    (5, "Iggy", "2010-11-30", 3, 4),
    (6, "George", "2010-01-20", 4, 5),
    (7, "Samantha", "2012-09-04", 1, 6),
    (8, "Max", "2012-09-04", 1, 6),
    (9, "Lucky", "2011-08-06", 5, 7),
    (10, "Mulligan", "2007-02-24", 2, 8),
    (11, "Freddy", "2010-03-09", 5, 9),
    (12, "Lucky", "2010-06-24", 2, 10),
    (13, "Sly", "2012-06-08", 1, 10),
];

const VETS: &[(i64, &str, &str)] = &[
    (1, "James", "Carter"),
    (2, "Helen", "Leary"),
    (3, "Linda", "Douglas"),
    (4, "Rafael", "Ortega"),
    (5, "Henry", "Stevens"),
    (6, "Sharon", "Jenkins"),
];

const SPECIALTIES: &[(i64, &str)] = &[(1, "radiology"), (2, "surgery"), (3, "dentistry")];

// vet id, specialty id
const VET_SPECIALTIES: &[(i64, i64)] = &[(2, 1), (3, 2), (3, 3), (4, 2), (5, 1)];

// id, pet id, date, description
const VISITS: &[(i64, i64, &str, &str)] = &[
    (1, 7, "2013-01-01", "rabies shot"),
    (2, 8, "2013-01-02", "rabies shot"),
    (3, 8, "2013-01-03", "neutered"),
    (4, 7, "2013-01-04", "spayed"),
];

/// Load the sample data of `service` if its primary table is empty.
///
/// Returns whether anything was inserted. Runs in one transaction.
pub(crate) async fn seed_if_empty(pool: &SqlitePool, service: ClinicService) -> Result<bool> {
    let primary_table = match service {
        ClinicService::Customers => "owners",
        ClinicService::Vets => "vets",
        ClinicService::Visits => "visits",
    };
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {primary_table}"))
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    match service {
        ClinicService::Customers => {
            for (id, name) in PET_TYPES {
                sqlx::query("INSERT OR IGNORE INTO types (id, name) VALUES (?, ?)")
                    .bind(*id)
                    .bind(*name)
                    .execute(&mut *tx)
                    .await?;
            }
            for (id, first, last, address, city, telephone) in OWNERS {
                sqlx::query(
                    "INSERT INTO owners (id, first_name, last_name, address, city, telephone) VALUES (?, ?, ?, ?, ?, ?)",
                )
                .bind(*id)
                .bind(*first)
                .bind(*last)
                .bind(*address)
                .bind(*city)
                .bind(*telephone)
                .execute(&mut *tx)
                .await?;
            }
            for (id, name, birth_date, type_id, owner_id) in PETS {
                sqlx::query(
                    "INSERT INTO pets (id, name, birth_date, type_id, owner_id) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(*id)
                .bind(*name)
                .bind(*birth_date)
                .bind(*type_id)
                .bind(*owner_id)
                .execute(&mut *tx)
                .await?;
            }
        }
        ClinicService::Vets => {
            for (id, first, last) in VETS {
                sqlx::query("INSERT INTO vets (id, first_name, last_name) VALUES (?, ?, ?)")
                    .bind(*id)
                    .bind(*first)
                    .bind(*last)
                    .execute(&mut *tx)
                    .await?;
            }
            for (id, name) in SPECIALTIES {
                sqlx::query("INSERT OR IGNORE INTO specialties (id, name) VALUES (?, ?)")
                    .bind(*id)
                    .bind(*name)
                    .execute(&mut *tx)
                    .await?;
            }
            for (vet_id, specialty_id) in VET_SPECIALTIES {
                sqlx::query("INSERT INTO vet_specialties (vet_id, specialty_id) VALUES (?, ?)")
                    .bind(*vet_id)
                    .bind(*specialty_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }
        ClinicService::Visits => {
            for (id, pet_id, date, description) in VISITS {
                sqlx::query(
                    "INSERT INTO visits (id, pet_id, visit_date, description) VALUES (?, ?, ?, ?)",
                )
                .bind(*id)
                .bind(*pet_id)
                .bind(*date)
                .bind(*description)
                .execute(&mut *tx)
                .await?;
            }
        }
    }
    tx.commit().await?;

    Ok(true)
}
