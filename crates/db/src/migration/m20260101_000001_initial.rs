//! Initial schema: admin accounts and every content table.
//!
//! Content tables share one shape: a serial id, the resource's own columns,
//! at most one nullable storage reference column and two timestamps.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(SCHEMA_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const SCHEMA_SQL: &str = r"
-- Admin accounts for the management panel
CREATE TABLE admins (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(100) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    full_name VARCHAR(255) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Hero banner slides on the home page
CREATE TABLE hero_banners (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    subtitle VARCHAR(255),
    link_url VARCHAR(255),
    sort_order INTEGER NOT NULL DEFAULT 0,
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_hero_banners_created ON hero_banners(created_at DESC, id DESC);

-- News articles
CREATE TABLE news (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    content TEXT NOT NULL,
    author VARCHAR(255),
    published_at TIMESTAMPTZ,
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_news_created ON news(created_at DESC, id DESC);

-- Announcements with an optional attached document
CREATE TABLE announcements (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    content TEXT NOT NULL,
    published_at TIMESTAMPTZ,
    attachment VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_announcements_created ON announcements(created_at DESC, id DESC);

-- Student and school achievements
CREATE TABLE achievements (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    level VARCHAR(255),
    year INTEGER,
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_achievements_created ON achievements(created_at DESC, id DESC);

-- Extracurricular activities
CREATE TABLE extracurriculars (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    coach VARCHAR(255),
    schedule VARCHAR(255),
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_extracurriculars_created ON extracurriculars(created_at DESC, id DESC);

-- Academic calendar documents
CREATE TABLE academic_calendars (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    academic_year VARCHAR(255) NOT NULL,
    description TEXT,
    document VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_academic_calendars_created ON academic_calendars(created_at DESC, id DESC);

-- Alumni testimonials
CREATE TABLE alumni (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    graduation_year INTEGER NOT NULL,
    occupation VARCHAR(255),
    testimony TEXT,
    photo VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_alumni_created ON alumni(created_at DESC, id DESC);

-- Photo gallery items
CREATE TABLE galleries (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    category VARCHAR(255),
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_galleries_created ON galleries(created_at DESC, id DESC);

-- School facilities
CREATE TABLE facilities (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_facilities_created ON facilities(created_at DESC, id DESC);

-- The headmaster's welcome message
CREATE TABLE headmaster_messages (
    id SERIAL PRIMARY KEY,
    headmaster_name VARCHAR(255) NOT NULL,
    message TEXT NOT NULL,
    photo VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_headmaster_messages_created ON headmaster_messages(created_at DESC, id DESC);

-- School history timeline slides
CREATE TABLE history_slides (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    year INTEGER,
    sort_order INTEGER NOT NULL DEFAULT 0,
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_history_slides_created ON history_slides(created_at DESC, id DESC);

-- Vision, mission and goals
CREATE TABLE vision_missions (
    id SERIAL PRIMARY KEY,
    vision TEXT NOT NULL,
    mission TEXT NOT NULL,
    goals TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_vision_missions_created ON vision_missions(created_at DESC, id DESC);

-- School identity
CREATE TABLE school_profiles (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    npsn VARCHAR(255),
    address VARCHAR(255),
    phone VARCHAR(255),
    email VARCHAR(255),
    website VARCHAR(255),
    accreditation VARCHAR(255),
    description TEXT,
    logo VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_school_profiles_created ON school_profiles(created_at DESC, id DESC);

-- Organizational structure charts
CREATE TABLE organizational_structures (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT,
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_organizational_structures_created ON organizational_structures(created_at DESC, id DESC);

-- Study programs
CREATE TABLE programs (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    description TEXT,
    image VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_programs_created ON programs(created_at DESC, id DESC);

-- Staff and teacher directory
CREATE TABLE staff (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    position VARCHAR(255) NOT NULL,
    nip VARCHAR(255),
    subject VARCHAR(255),
    email VARCHAR(255),
    photo VARCHAR(512),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_staff_created ON staff(created_at DESC, id DESC);

-- Messages from the public contact form
CREATE TABLE contact_messages (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    subject VARCHAR(255),
    message TEXT NOT NULL,
    is_read BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX idx_contact_messages_created ON contact_messages(created_at DESC, id DESC);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS
    admins,
    hero_banners,
    news,
    announcements,
    achievements,
    extracurriculars,
    academic_calendars,
    alumni,
    galleries,
    facilities,
    headmaster_messages,
    history_slides,
    vision_missions,
    school_profiles,
    organizational_structures,
    programs,
    staff,
    contact_messages
CASCADE;
";
