//! Loads merged resort records into the catalog tables.

use entity::sea_orm_active_enums::{
    AerialwayKind, MemberType, OperationalStatus, TrailDifficulty,
};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    etl::osm::{ElementKind, Member, ResortRecord},
    model::resort::CreateResortDto,
    server::{
        data::catalog::{
            lift::LiftRepository, member::MemberRepository, resort::ResortRepository,
            trail::TrailRepository,
        },
        error::Error,
        model::catalog::{NewLift, NewTrail},
        util::{slug::slugify, terrain::elevation_difference},
    },
};

/// Country stored for listing entries that have none
pub const UNKNOWN_COUNTRY: &str = "Unknown";

#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Delete every resort and its catalog rows before loading
    pub clear: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { clear: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub resorts: usize,
    pub trails: usize,
    pub lifts: usize,
    /// Nodes, stations and untagged ways
    pub skipped_members: usize,
    /// Listing entries without a name
    pub skipped_resorts: usize,
}

/// Catalog row a merged member turns into
#[derive(Debug, Clone, PartialEq)]
pub enum MemberRow {
    Trail(NewTrail),
    Lift(NewLift),
}

/// Resort insert payload for a listing entry
pub fn resort_input(record: &ResortRecord) -> CreateResortDto {
    let coordinates = record.coordinates();
    let elevation_base_m = record
        .elevation_difference_m
        .and_then(|difference| elevation_difference(record.elevation_top_m, Some(difference)));

    CreateResortDto {
        name: record.name.trim().to_string(),
        country: record
            .location_country
            .clone()
            .filter(|country| !country.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
        region: record.location_region.clone(),
        latitude: coordinates.map(|c| c.lat),
        longitude: coordinates.map(|c| c.lon),
        rank: record.rank.map(|rank| rank as i32),
        rating: record.rating,
        url: record.url.clone(),
        total_trails: record.number_of_slopes.map(|n| n as i32),
        total_lifts: record.number_of_lifts.map(|n| n as i32),
        elevation_base_m,
        elevation_summit_m: record.elevation_top_m,
        total_slope_length_km: record.total_slope_length_km,
        annual_snowfall_cm: record.annual_snowfall_cm,
        ..Default::default()
    }
}

/// Classifies a merged member as a lift or trail of `resort_id`.
///
/// Only ways are imported. A way is a lift when its `aerialway` tag is present
/// and not `station`, otherwise a trail when it has `piste:type` or `piste`.
pub fn classify_member(member: &Member, resort_id: i32) -> Option<MemberRow> {
    if member.kind != ElementKind::Way {
        return None;
    }

    let latitude = member.center.map(|c| c.lat);
    let longitude = member.center.map(|c| c.lon);

    if let Some(aerialway) = member.tag("aerialway").filter(|kind| *kind != "station") {
        let status = member
            .tag("operational_status")
            .or(member.tag("aerialway:status"))
            .map(OperationalStatus::from_osm)
            .unwrap_or_default();

        return Some(MemberRow::Lift(NewLift {
            resort_id,
            osm_id: Some(member.id),
            name: member
                .tag("name")
                .map(str::to_string)
                .unwrap_or_else(|| format!("Lift {}", member.id)),
            aerialway: AerialwayKind::from_osm(aerialway),
            capacity: parse_tag(member, "aerialway:capacity"),
            speed_mps: parse_tag(member, "aerialway:speed"),
            length_m: parse_tag(member, "aerialway:length"),
            duration_min: parse_tag(member, "aerialway:duration"),
            base_elevation_m: None,
            top_elevation_m: None,
            vertical_rise_m: None,
            status,
            oneway: is_yes(member, "oneway"),
            lit: is_yes(member, "lit"),
            description: member.tag("description").map(str::to_string),
            latitude,
            longitude,
            area: None,
        }));
    }

    let piste_type = member.tag("piste:type").or(member.tag("piste"))?;

    Some(MemberRow::Trail(NewTrail {
        resort_id,
        osm_id: Some(member.id),
        name: member
            .tag("name")
            .map(str::to_string)
            .unwrap_or_else(|| format!("Trail {}", member.id)),
        piste_type: piste_type.to_string(),
        difficulty: member
            .tag("piste:difficulty")
            .and_then(TrailDifficulty::from_osm)
            .unwrap_or_default(),
        grooming: member.tag("piste:grooming").map(str::to_string),
        status: member
            .tag("piste:status")
            .map(OperationalStatus::from_osm)
            .unwrap_or_default(),
        lit: is_yes(member, "piste:lit"),
        oneway: is_yes(member, "piste:oneway"),
        abandoned: is_yes(member, "piste:abandoned"),
        gladed: is_yes(member, "gladed"),
        patrolled: member.tag("patrolled") != Some("no"),
        grooming_priority: parse_tag::<i32>(member, "piste:grooming:priority")
            .filter(|priority| (1..=5).contains(priority)),
        description: member.tag("description").map(str::to_string),
        latitude,
        longitude,
        ..Default::default()
    }))
}

fn is_yes(member: &Member, key: &str) -> bool {
    member.tag(key) == Some("yes")
}

fn parse_tag<T: std::str::FromStr>(member: &Member, key: &str) -> Option<T> {
    member.tag(key).and_then(|value| value.trim().parse().ok())
}

/// Loads listing entries with their members into the database.
///
/// Each resort is written with its trails, lifts and member references in
/// one transaction. Slugs that are already taken get a numeric suffix.
///
/// # Returns
/// - `Ok(ImportSummary)` - Counts of created rows and skipped input
/// - `Err(Error::DbErr)` - Clearing or inserting failed, the current resort is rolled back
pub async fn import_resorts(
    db: &DatabaseConnection,
    records: &[ResortRecord],
    options: ImportOptions,
) -> Result<ImportSummary, Error> {
    let mut summary = ImportSummary::default();

    if options.clear {
        let deleted = ResortRepository::new(db).delete_all().await?;
        tracing::info!(resorts = deleted.rows_affected, "Cleared existing catalog");
    }

    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            tracing::warn!(index, "Skipping listing entry without a name");
            summary.skipped_resorts += 1;
            continue;
        }

        let txn = db.begin().await?;

        let resort_repo = ResortRepository::new(&txn);
        let input = resort_input(record);
        let slug = resort_repo.available_slug(&slugify(&input.name)).await?;
        let resort = resort_repo
            .create(
                &input,
                &slug,
                elevation_difference(input.elevation_summit_m, input.elevation_base_m),
            )
            .await?;

        let member_repo = MemberRepository::new(&txn);
        let mut member_count = 0;
        for member in &record.members {
            match classify_member(member, resort.id) {
                Some(MemberRow::Trail(trail)) => {
                    let trail = TrailRepository::new(&txn).create(trail).await?;
                    member_repo
                        .create(resort.id, trail.id, MemberType::Trail)
                        .await?;
                    summary.trails += 1;
                    member_count += 1;
                }
                Some(MemberRow::Lift(lift)) => {
                    let lift = LiftRepository::new(&txn).create(lift).await?;
                    member_repo
                        .create(resort.id, lift.id, MemberType::Lift)
                        .await?;
                    summary.lifts += 1;
                    member_count += 1;
                }
                None => summary.skipped_members += 1,
            }
        }

        txn.commit().await?;
        summary.resorts += 1;

        tracing::info!(
            position = index + 1,
            total = records.len(),
            resort = %resort.name,
            slug = %resort.slug,
            members = member_count,
            "Imported resort"
        );
    }

    Ok(summary)
}
