//! Document layout: where each section and content block sits on the page.
//!
//! The layout is built once per content or width change. Navigation, reveal
//! tracking and mouse hit-testing all read row positions from here instead of
//! measuring the rendered output.

use super::portfolio::Portfolio;

/// Page sections, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Education,
    Skills,
    Experience,
    Projects,
    Achievements,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    /// Anchor identifier, as used in `#id` links
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// What a block displays; drives styling and animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Hero element, staggered by index (name, title, tagline, call to action)
    Hero(usize),
    Heading,
    AboutParagraph,
    EducationCard,
    /// Category title followed by one line per skill item
    SkillCategory,
    /// Label line followed by a bar line
    ProgressItem { level: u8 },
    TimelineItem,
    ProjectCard,
    AchievementCard,
    ContactItem,
    /// Placeholder rows filled by the contact form renderer
    ContactForm,
    Spacer,
}

impl BlockKind {
    /// Blocks that start hidden and fade in once scrolled into view
    pub fn reveals_on_scroll(&self) -> bool {
        matches!(
            self,
            Self::AboutParagraph
                | Self::EducationCard
                | Self::SkillCategory
                | Self::ProgressItem { .. }
                | Self::TimelineItem
                | Self::ProjectCard
                | Self::AchievementCard
                | Self::ContactItem
        )
    }
}

/// A block of pre-wrapped lines at a fixed document row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBlock {
    pub section: SectionId,
    pub kind: BlockKind,
    pub top: usize,
    pub lines: Vec<String>,
}

impl PageBlock {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn bottom(&self) -> usize {
        self.top + self.height()
    }
}

/// Identity of a block that survives relayout: its section and its
/// position among that section's blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockKey {
    pub section: SectionId,
    pub ordinal: usize,
}

/// Row range of one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

impl SectionSpan {
    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.top + self.height
    }
}

/// Rows of padding above the hero content
const HERO_PADDING: usize = 2;
/// Indent applied to card body lines
const INDENT: &str = "  ";

/// The laid out page
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub blocks: Vec<PageBlock>,
    pub sections: Vec<SectionSpan>,
    pub width: u16,
}

impl PageLayout {
    /// Lay out `portfolio` for a page `width` columns wide.
    ///
    /// `form_height` reserves rows for the contact form; pass `None` when the
    /// page has no form.
    pub fn build(portfolio: &Portfolio, width: u16, form_height: Option<usize>) -> Self {
        let mut builder = LayoutBuilder::new(width);
        let text_width = builder.text_width();

        // Home
        let owner = &portfolio.owner;
        builder.start_section(SectionId::Home);
        builder.push(BlockKind::Spacer, vec![String::new(); HERO_PADDING]);
        let hero = [
            owner.name.clone(),
            owner.title.clone(),
            owner.tagline.clone(),
            "[ Get In Touch ]".to_string(),
        ];
        for (idx, text) in hero.into_iter().enumerate() {
            builder.push(BlockKind::Hero(idx), wrap_text(&text, text_width));
        }
        builder.spacer();

        if !portfolio.about.is_empty() {
            builder.start_section(SectionId::About);
            builder.heading("About Me");
            for paragraph in &portfolio.about {
                builder.push(BlockKind::AboutParagraph, wrap_text(paragraph, text_width));
                builder.spacer();
            }
        }

        if !portfolio.education.is_empty() {
            builder.start_section(SectionId::Education);
            builder.heading("Education");
            for entry in &portfolio.education {
                let mut lines = vec![format!("▸ {}", entry.degree)];
                lines.push(format!("{INDENT}{} · {}", entry.institution, entry.period));
                lines.extend(indented(&entry.details, text_width));
                builder.push(BlockKind::EducationCard, lines);
                builder.spacer();
            }
        }

        if !portfolio.skills.is_empty() {
            builder.start_section(SectionId::Skills);
            builder.heading("Skills");
            for category in &portfolio.skills {
                let mut lines = vec![category.name.clone()];
                lines.extend(category.items.iter().map(|i| format!("{INDENT}• {i}")));
                builder.push(BlockKind::SkillCategory, lines);
                for item in &category.progress {
                    let level = item.level.min(100);
                    builder.push(
                        BlockKind::ProgressItem { level },
                        vec![format!("{INDENT}{} {level}%", item.name), String::new()],
                    );
                }
                builder.spacer();
            }
        }

        if !portfolio.experience.is_empty() {
            builder.start_section(SectionId::Experience);
            builder.heading("Experience");
            for item in &portfolio.experience {
                let mut lines = vec![format!("● {} · {}", item.role, item.organization)];
                lines.push(format!("│ {}", item.period));
                lines.extend(
                    wrap_text(&item.summary, text_width.saturating_sub(2))
                        .into_iter()
                        .map(|l| format!("│ {l}")),
                );
                builder.push(BlockKind::TimelineItem, lines);
                builder.spacer();
            }
        }

        if !portfolio.projects.is_empty() {
            builder.start_section(SectionId::Projects);
            builder.heading("Projects");
            for project in &portfolio.projects {
                let mut lines = vec![project.name.clone()];
                lines.extend(indented(&project.description, text_width));
                if !project.tech.is_empty() {
                    lines.push(format!("{INDENT}[{}]", project.tech.join("] [")));
                }
                if let Some(link) = &project.link {
                    lines.push(format!("{INDENT}↗ {link}"));
                }
                builder.push(BlockKind::ProjectCard, lines);
                builder.spacer();
            }
        }

        if !portfolio.achievements.is_empty() {
            builder.start_section(SectionId::Achievements);
            builder.heading("Achievements");
            for achievement in &portfolio.achievements {
                let mut lines = vec![format!("★ {}", achievement.title)];
                lines.extend(indented(&achievement.description, text_width));
                builder.push(BlockKind::AchievementCard, lines);
                builder.spacer();
            }
        }

        if let Some(contact) = &portfolio.contact {
            builder.start_section(SectionId::Contact);
            builder.heading("Get In Touch");
            let items = [
                contact.email.as_ref().map(|e| format!("✉ {e}")),
                contact.phone.as_ref().map(|p| format!("☎ {p}")),
                contact.location.as_ref().map(|l| format!("⌖ {l}")),
            ];
            for item in items.into_iter().flatten() {
                builder.push(BlockKind::ContactItem, vec![item]);
            }
            for link in &contact.links {
                builder.push(
                    BlockKind::ContactItem,
                    vec![format!("↗ {}: {}", link.label, link.url)],
                );
            }
            if let Some(height) = form_height.filter(|_| contact.form) {
                builder.spacer();
                builder.push(BlockKind::ContactForm, vec![String::new(); height]);
            }
            builder.spacer();
        }

        builder.finish()
    }

    /// Total document height in rows
    pub fn total_height(&self) -> usize {
        self.blocks.last().map(|b| b.bottom()).unwrap_or(0)
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self, viewport_height: usize) -> usize {
        self.total_height().saturating_sub(viewport_height)
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section containing a document row
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.sections.iter().find(|s| s.contains(row)).map(|s| s.id)
    }

    /// Sections present on the page, in order
    pub fn section_ids(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.id).collect()
    }

    pub fn block_key(&self, index: usize) -> Option<BlockKey> {
        let block = self.blocks.get(index)?;
        let ordinal = self.blocks[..index]
            .iter()
            .filter(|b| b.section == block.section)
            .count();
        Some(BlockKey {
            section: block.section,
            ordinal,
        })
    }

    /// Index of the block with identity `key` in this layout
    pub fn block_index(&self, key: BlockKey) -> Option<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.section == key.section)
            .nth(key.ordinal)
            .map(|(index, _)| index)
    }

    /// The contact form placeholder, when the page has one
    pub fn form_block(&self) -> Option<&PageBlock> {
        self.blocks
            .iter()
            .find(|b| matches!(b.kind, BlockKind::ContactForm))
    }
}

/// Accumulates blocks and section spans while walking the content
struct LayoutBuilder {
    width: u16,
    row: usize,
    blocks: Vec<PageBlock>,
    sections: Vec<SectionSpan>,
}

impl LayoutBuilder {
    fn new(width: u16) -> Self {
        Self {
            width,
            row: 0,
            blocks: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Usable text width, leaving a one column margin on each side
    fn text_width(&self) -> usize {
        (self.width as usize).saturating_sub(2).max(10)
    }

    fn current_section(&self) -> SectionId {
        self.sections
            .last()
            .map(|s| s.id)
            .unwrap_or(SectionId::Home)
    }

    fn start_section(&mut self, id: SectionId) {
        self.close_section();
        self.sections.push(SectionSpan {
            id,
            top: self.row,
            height: 0,
        });
    }

    fn close_section(&mut self) {
        let row = self.row;
        if let Some(last) = self.sections.last_mut() {
            last.height = row - last.top;
        }
    }

    fn push(&mut self, kind: BlockKind, lines: Vec<String>) {
        let block = PageBlock {
            section: self.current_section(),
            kind,
            top: self.row,
            lines,
        };
        self.row = block.bottom();
        self.blocks.push(block);
    }

    fn heading(&mut self, title: &str) {
        let underline = "─".repeat(title.chars().count());
        self.push(BlockKind::Heading, vec![title.to_string(), underline]);
        self.spacer();
    }

    fn spacer(&mut self) {
        self.push(BlockKind::Spacer, vec![String::new()]);
    }

    fn finish(mut self) -> PageLayout {
        self.close_section();
        PageLayout {
            blocks: self.blocks,
            sections: self.sections,
            width: self.width,
        }
    }
}

fn indented(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    wrap_text(text, width.saturating_sub(INDENT.len()))
        .into_iter()
        .map(|l| format!("{INDENT}{l}"))
        .collect()
}

/// Word-wrap text to fit within a maximum width (in characters)
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_len += 1;
            }
            current_line.push_str(word);
            current_len += word_len;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
