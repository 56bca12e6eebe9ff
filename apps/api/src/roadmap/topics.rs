//! Static study content the roadmap generator draws tasks from.

pub struct Topic {
    pub title: &'static str,
    pub hours: u32,
    pub resources: &'static [&'static str],
}

const fn topic(title: &'static str, hours: u32, resources: &'static [&'static str]) -> Topic {
    Topic {
        title,
        hours,
        resources,
    }
}

// ── DSA, by difficulty ──────────────────────────────────────────────────────

pub const DSA_BEGINNER: &[Topic] = &[
    topic("Arrays & Strings Basics", 10, &["LeetCode Easy", "NeetCode Arrays"]),
    topic("Two Pointers Technique", 8, &["LeetCode Two Pointers", "Take U Forward"]),
    topic("Basic Sorting Algorithms", 6, &["Visualgo", "GeeksforGeeks"]),
    topic("Hash Maps & Sets", 8, &["LeetCode Hash Table", "NeetCode Hashing"]),
];

pub const DSA_INTERMEDIATE: &[Topic] = &[
    topic("Binary Search Mastery", 10, &["LeetCode Binary Search", "Strivers A2Z"]),
    topic("Linked Lists & Pointers", 8, &["LeetCode Linked List", "NeetCode"]),
    topic("Stacks & Queues", 8, &["LeetCode Stack", "Monotonic Stack Patterns"]),
    topic("Trees & BST", 12, &["LeetCode Tree", "NeetCode Trees"]),
    topic("Recursion & Backtracking", 12, &["LeetCode Backtracking", "Strivers A2Z"]),
];

pub const DSA_ADVANCED: &[Topic] = &[
    topic("Dynamic Programming", 20, &["LeetCode DP", "NeetCode DP", "AtCoder DP"]),
    topic("Graph Algorithms", 15, &["LeetCode Graph", "William Fiset YouTube"]),
    topic("Advanced Trees (Tries, Segment)", 10, &["CP Algorithms", "CSES Problem Set"]),
    topic("Greedy Algorithms", 8, &["LeetCode Greedy", "Strivers A2Z"]),
];

// ── CS fundamentals ─────────────────────────────────────────────────────────

pub const OS: &[Topic] = &[
    topic("Process & Threads", 4, &["Gate Smashers", "OS Concepts Book"]),
    topic("Memory Management", 4, &["Gate Smashers", "GeeksforGeeks"]),
    topic("CPU Scheduling", 3, &["Gate Smashers", "Javatpoint"]),
    topic("Deadlocks & Synchronization", 4, &["Gate Smashers", "Neso Academy"]),
];

pub const CN: &[Topic] = &[
    topic("OSI & TCP/IP Models", 3, &["Gate Smashers", "Computer Networks Book"]),
    topic("HTTP, DNS, TCP/UDP", 4, &["MDN Web Docs", "Hussein Nasser"]),
    topic("Network Security Basics", 3, &["Cybrary", "NetworkChuck"]),
];

pub const DBMS: &[Topic] = &[
    topic("SQL Fundamentals", 6, &["SQLZoo", "Mode Analytics SQL"]),
    topic("Normalization & ER Diagrams", 4, &["Gate Smashers", "GeeksforGeeks"]),
    topic("Indexing & Transactions", 4, &["Use The Index Luke", "CMU DB Course"]),
    topic("NoSQL Concepts", 3, &["MongoDB University", "Redis University"]),
];

pub const OOPS: &[Topic] = &[
    topic("Core OOP Concepts", 4, &["GeeksforGeeks", "Refactoring Guru"]),
    topic("SOLID Principles", 4, &["Refactoring Guru", "Clean Code Book"]),
    topic("Design Patterns", 8, &["Refactoring Guru", "Head First Design Patterns"]),
];

// ── Projects ────────────────────────────────────────────────────────────────

pub const PROJECTS: &[Topic] = &[
    topic("Build Portfolio Website", 8, &["Frontend Mentor", "Tailwind CSS Docs"]),
    topic("Full Stack CRUD App", 15, &["Traversy Media", "Next.js Docs"]),
    topic("Real-time Chat Application", 12, &["Socket.io Docs", "Firebase Docs"]),
    topic("API Development Project", 10, &["REST API Tutorial", "Postman Learning"]),
];

// ── Advisory exclusions ─────────────────────────────────────────────────────

/// Too time-consuming for a placement timeline.
pub const EXCLUDED_SHORT_TIME: &[&str] = &[
    "Competitive Programming (CP) contests",
    "Advanced graph theory (strongly connected components)",
    "Number theory and combinatorics",
    "Segment trees with lazy propagation",
    "Heavy-light decomposition",
];

/// Low interview ROI unless specifically targeted.
pub const EXCLUDED_LOW_PRIORITY: &[&str] = &[
    "Blockchain development",
    "Game development",
    "Mobile app development (unless targeted)",
    "Machine learning (unless targeted)",
];
