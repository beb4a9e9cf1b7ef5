use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullStatus {
    Open,
    Merged,
    Closed,
}

impl fmt::Display for PullStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PullStatus::Open => "open",
            PullStatus::Merged => "merged",
            PullStatus::Closed => "closed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub status: PullStatus,
    pub created: &'static str,
    pub comments: u32,
    pub additions: u32,
    pub deletions: u32,
}

pub const PULL_REQUESTS: [PullRequest; 3] = [
    PullRequest {
        number: 42,
        title: "Add new authentication system",
        author: "john-doe",
        status: PullStatus::Open,
        created: "2 hours ago",
        comments: 3,
        additions: 156,
        deletions: 23,
    },
    PullRequest {
        number: 41,
        title: "Fix responsive design issues",
        author: "jane-smith",
        status: PullStatus::Merged,
        created: "1 day ago",
        comments: 8,
        additions: 45,
        deletions: 12,
    },
    PullRequest {
        number: 40,
        title: "Update documentation",
        author: "bob-wilson",
        status: PullStatus::Closed,
        created: "3 days ago",
        comments: 2,
        additions: 89,
        deletions: 5,
    },
];

/// Pull requests offered in the bulk review dialog. Closed ones are left out.
pub fn reviewable() -> impl Iterator<Item = &'static PullRequest> {
    PULL_REQUESTS
        .iter()
        .filter(|pr| pr.status != PullStatus::Closed)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PullsState {
    /// Nothing is selected until the user picks a pull request.
    pub selected: Option<usize>,

    // --- Bulk Review ---
    pub bulk_open: bool,
    pub bulk_cursor: usize,
    /// PR numbers ticked in the bulk dialog.
    pub bulk_marked: Vec<u32>,
}

impl PullsState {
    #[must_use]
    pub fn selected_pull(&self) -> Option<&'static PullRequest> {
        self.selected.and_then(|i| PULL_REQUESTS.get(i))
    }

    pub fn select_next(&mut self) {
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % PULL_REQUESTS.len()));
    }

    pub fn select_prev(&mut self) {
        self.selected = Some(
            self.selected
                .and_then(|i| i.checked_sub(1))
                .unwrap_or(PULL_REQUESTS.len() - 1),
        );
    }

    pub fn open_bulk(&mut self) {
        self.bulk_open = true;
        self.bulk_cursor = 0;
        self.bulk_marked.clear();
        // Start with the pull request being looked at, if it can be reviewed.
        if let Some(pr) = self.selected_pull().filter(|pr| pr.status != PullStatus::Closed) {
            self.bulk_marked.push(pr.number);
        }
    }

    pub fn bulk_next(&mut self) {
        self.bulk_cursor = (self.bulk_cursor + 1) % reviewable().count();
    }

    pub fn bulk_prev(&mut self) {
        self.bulk_cursor = self
            .bulk_cursor
            .checked_sub(1)
            .unwrap_or(reviewable().count() - 1);
    }

    pub fn bulk_toggle(&mut self) {
        let Some(pr) = reviewable().nth(self.bulk_cursor) else {
            return;
        };
        if let Some(pos) = self.bulk_marked.iter().position(|&n| n == pr.number) {
            self.bulk_marked.remove(pos);
        } else {
            self.bulk_marked.push(pr.number);
        }
    }

    #[must_use]
    pub fn is_marked(&self, number: u32) -> bool {
        self.bulk_marked.contains(&number)
    }

    /// Closes the dialog and returns the ticked PRs in list order. With
    /// nothing ticked the dialog stays open and `None` is returned.
    pub fn post_bulk(&mut self) -> Option<Vec<u32>> {
        let posted: Vec<u32> = reviewable()
            .map(|pr| pr.number)
            .filter(|n| self.is_marked(*n))
            .collect();
        if posted.is_empty() {
            return None;
        }
        self.bulk_open = false;
        self.bulk_marked.clear();
        Some(posted)
    }
}
