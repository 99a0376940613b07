//! Database seeder for a fresh installation.
//!
//! Creates the first admin account, a placeholder school profile and a
//! vision/mission row. Rows that already exist are left alone.
//!
//! Usage: `SEKOLAH_ADMIN_PASSWORD=... cargo run --bin seeder`

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use sekolah_core::auth::hash_new_password;
use sekolah_db::AdminRepository;
use sekolah_db::entities::{school_profiles, vision_missions};

const DEFAULT_ADMIN_USERNAME: &str = "admin";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .or_else(|_| std::env::var("SEKOLAH__DATABASE__URL"))
        .context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = Arc::new(
        sekolah_db::connect(&database_url)
            .await
            .context("failed to connect to database")?,
    );

    println!("Seeding admin account...");
    seed_admin(&db).await?;

    println!("Seeding school profile...");
    seed_school_profile(&db).await?;

    println!("Seeding vision and mission...");
    seed_vision_mission(&db).await?;

    println!("Seeding complete!");
    Ok(())
}

/// Creates the default admin from `SEKOLAH_ADMIN_USERNAME` / `SEKOLAH_ADMIN_PASSWORD`.
async fn seed_admin(db: &Arc<DatabaseConnection>) -> Result<()> {
    let username = std::env::var("SEKOLAH_ADMIN_USERNAME")
        .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());
    let admins = AdminRepository::new(Arc::clone(db));

    if admins.find_by_username(&username).await?.is_some() {
        println!("  Admin '{username}' already exists, skipping...");
        return Ok(());
    }

    let password = std::env::var("SEKOLAH_ADMIN_PASSWORD")
        .context("SEKOLAH_ADMIN_PASSWORD must be set to create the first admin")?;
    let password_hash = hash_new_password(&password)?;

    admins
        .create(&username, &password_hash, "Administrator")
        .await
        .context("failed to insert admin")?;
    println!("  Created admin: {username}");
    Ok(())
}

async fn seed_school_profile(db: &DatabaseConnection) -> Result<()> {
    if school_profiles::Entity::find().count(db).await? > 0 {
        println!("  School profile already exists, skipping...");
        return Ok(());
    }

    let now = Utc::now().into();
    school_profiles::ActiveModel {
        name: Set("Nama Sekolah".to_string()),
        npsn: Set(None),
        address: Set(None),
        phone: Set(None),
        email: Set(None),
        website: Set(None),
        accreditation: Set(None),
        description: Set(Some("Silakan lengkapi profil sekolah dari panel admin.".to_string())),
        logo: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .context("failed to insert school profile")?;

    println!("  Created placeholder school profile");
    Ok(())
}

async fn seed_vision_mission(db: &DatabaseConnection) -> Result<()> {
    if vision_missions::Entity::find().count(db).await? > 0 {
        println!("  Vision and mission already exist, skipping...");
        return Ok(());
    }

    let now = Utc::now().into();
    vision_missions::ActiveModel {
        vision: Set("Visi sekolah belum diisi.".to_string()),
        mission: Set("Misi sekolah belum diisi.".to_string()),
        goals: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .context("failed to insert vision and mission")?;

    println!("  Created placeholder vision and mission");
    Ok(())
}
