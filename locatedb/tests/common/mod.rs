//! In-memory LOCATEDB archive builder for tests

#![allow(dead_code)]

use locatedb::PackedTime;

pub const DIRECTORY: u8 = 0x80;
pub const FILE: u8 = 0x10;

pub enum Node {
    Dir { name: String, attributes: u8, children: Vec<Node> },
    File { name: String, attributes: u8, size: u64 },
}

pub fn dir(name: &str, children: Vec<Node>) -> Node {
    Node::Dir { name: name.into(), attributes: DIRECTORY, children }
}

pub fn file(name: &str, size: u64) -> Node {
    Node::File { name: name.into(), attributes: FILE, size }
}

pub struct RootSpec {
    pub kind: u8,
    pub path: String,
    pub label: String,
    pub serial: u32,
    pub file_system: String,
    pub children: Vec<Node>,
}

pub struct ArchiveBuilder {
    pub marker: Vec<u8>,
    pub version: Vec<u8>,
    pub flags: u8,
    pub creator: String,
    pub description: String,
    pub creation_time: PackedTime,
    pub roots: Vec<RootSpec>,
}

pub const STAMP: PackedTime = PackedTime::new(2020, 4, 15, 13, 45, 12);

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self {
            marker: b"LOCATEDB".to_vec(),
            version: b"20".to_vec(),
            flags: 0x21,
            creator: "Creator goes here".into(),
            description: "Description goes here".into(),
            creation_time: STAMP,
            roots: Vec::new(),
        }
    }
}

impl ArchiveBuilder {
    pub fn root(mut self, kind: u8, path: &str, label: &str, serial: u32, fs: &str, children: Vec<Node>) -> Self {
        self.roots.push(RootSpec {
            kind,
            path: path.into(),
            label: label.into(),
            serial,
            file_system: fs.into(),
            children,
        });
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let (total_files, total_dirs) = self
            .roots
            .iter()
            .map(|r| count(&r.children))
            .fold((0, 0), |acc, c| (acc.0 + c.0, acc.1 + c.1));

        let mut tail = Vec::new();
        utf16z(&mut tail, &self.creator);
        utf16z(&mut tail, &self.description);
        utf16z(&mut tail, "");
        utf16z(&mut tail, "");
        tail.extend_from_slice(&self.creation_time.to_dword().to_le_bytes());
        tail.extend_from_slice(&total_files.to_le_bytes());
        tail.extend_from_slice(&total_dirs.to_le_bytes());

        let mut out = Vec::new();
        out.extend_from_slice(&self.marker);
        out.extend_from_slice(&self.version);
        out.push(self.flags);
        out.extend_from_slice(&(tail.len() as u32).to_le_bytes());
        out.extend(tail);

        for root in &self.roots {
            let (files, dirs) = count(&root.children);
            let mut body = Vec::new();
            body.push(root.kind);
            utf16z(&mut body, &root.path);
            utf16z(&mut body, &root.label);
            body.extend_from_slice(&root.serial.to_le_bytes());
            utf16z(&mut body, &root.file_system);
            body.extend_from_slice(&files.to_le_bytes());
            body.extend_from_slice(&dirs.to_le_bytes());
            for child in &root.children {
                encode_node(&mut body, child);
            }
            body.extend_from_slice(&[0, 0]);

            out.extend_from_slice(&(body.len() as u32).to_le_bytes());
            out.extend(body);
        }

        out.extend_from_slice(&0u32.to_le_bytes());
        out
    }
}

pub fn count(nodes: &[Node]) -> (u32, u32) {
    nodes.iter().fold((0, 0), |(files, dirs), node| match node {
        Node::File { .. } => (files + 1, dirs),
        Node::Dir { children, .. } => {
            let (f, d) = count(children);
            (files + f, dirs + d + 1)
        }
    })
}

pub fn utf16z(out: &mut Vec<u8>, s: &str) {
    out.extend(s.encode_utf16().flat_map(|u| u.to_le_bytes()));
    out.extend_from_slice(&[0, 0]);
}

fn encode_node(out: &mut Vec<u8>, node: &Node) {
    match node {
        Node::Dir { name, attributes, children } => {
            let mut body = Vec::new();
            body.push(name.encode_utf16().count() as u8);
            utf16z(&mut body, name);
            for _ in 0..3 {
                body.extend_from_slice(&STAMP.to_dword().to_le_bytes());
            }
            for child in children {
                encode_node(&mut body, child);
            }
            body.push(0);

            out.push(*attributes | DIRECTORY);
            // length field + everything up to and including the closing byte
            out.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
            out.extend(body);
        }
        Node::File { name, attributes, size } => {
            out.push(*attributes);
            out.push(name.encode_utf16().count() as u8);
            let ext = name.rfind('.').map(|i| name[..i + 1].encode_utf16().count()).unwrap_or(name.encode_utf16().count());
            out.push(ext as u8);
            utf16z(out, name);
            out.extend_from_slice(&((*size & 0xFFFF_FFFF) as u32).to_le_bytes());
            out.extend_from_slice(&((*size >> 32) as u16).to_le_bytes());
            for _ in 0..3 {
                out.extend_from_slice(&STAMP.to_dword().to_le_bytes());
            }
        }
    }
}

/// Volume `I:\` with 10 files and 7 directories
pub fn sample_tree() -> Vec<Node> {
    vec![
        dir(
            "RootFolder1",
            vec![dir("Sub1", vec![file("deep.txt", 10)]), file("a.txt", 20), file("b.bin", 30)],
        ),
        file("root1.txt", 1),
        dir(
            "RootFolder2",
            vec![dir("Nested", vec![dir("Deeper", vec![file("x.dat", 5_000_000_000)])]), file("c.doc", 40)],
        ),
        dir("RootFolder3", vec![dir("Empty", vec![]), file("readme.md", 50)]),
        file("root2.txt", 2),
        file("root3.log", 3),
        file("root4.ini", 4),
    ]
}

pub fn sample_archive() -> Vec<u8> {
    ArchiveBuilder::default()
        .root(0x20, "I:\\", "LOCATE32_NTFS", 3_838_827_262, "NTFS", sample_tree())
        .build()
}

/// Two volumes, for root skipping
pub fn two_volume_archive() -> Vec<u8> {
    ArchiveBuilder::default()
        .root(0x20, "I:\\", "LOCATE32_NTFS", 3_838_827_262, "NTFS", sample_tree())
        .root(
            0x10,
            "C:\\",
            "SYSTEM",
            42,
            "NTFS",
            vec![dir("Windows", vec![file("notepad.exe", 1024)]), file("pagefile.sys", 4096)],
        )
        .build()
}
