//! Read-only decoder for classic Macintosh StuffIt (.sit) archives.
//!
//! This crate parses the original `SIT!` container family (magics `SIT!`,
//! `ST46`, `ST65`, ...), preserves the two-fork Macintosh file structure,
//! and decompresses the two methods found in old archives that are
//! actually hard: method 13 ("TableHuff") and method 14 ("Installer").
//! Method 0 (store) is supported as a passthrough; everything else is
//! rejected.
//!
//! Entries are addressed by case-insensitive, colon-delimited Mac paths.
//! Both forks and the 16-byte Finder info block of every entry are
//! reachable through the archive handle, and every decompressed fork is
//! verified against the CRC-16 stored in its entry header.
//!
//! # Example
//!
//! ```no_run
//! use unsit::SitArchive;
//!
//! let archive = SitArchive::open_file("game.sit", false).unwrap();
//! for path in archive.list() {
//!     let data = archive.read(&path).unwrap();
//!     println!("{}: {} bytes", path, data.len());
//! }
//! ```

use encoding_rs::MACINTOSH;
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur while opening or reading a StuffIt archive.
#[derive(Error, Debug)]
pub enum SitError {
    /// The primary or secondary magic number did not match.
    #[error("Not a StuffIt archive")]
    BadMagic,

    /// The stream ended before the declared archive size, mid-header, or
    /// mid-payload.
    #[error("Archive is truncated")]
    Truncated,

    /// An entry name exceeds the 31-byte Mac limit.
    #[error("File name length too long in archive: {0}")]
    NameTooLong(u8),

    /// The CRC over an entry's 112-byte header failed.
    #[error("Entry header CRC mismatch: computed {actual:#06x}, stored {expected:#06x}")]
    HeaderCrcMismatch { expected: u16, actual: u16 },

    /// The fork is encrypted; decryption is not supported.
    #[error("Entry is encrypted")]
    Encrypted,

    /// The fork uses a compression method other than 0, 13 or 14.
    #[error("Unsupported compression method {0}")]
    UnsupportedMethod(u8),

    /// The compressed bitstream is damaged.
    #[error("Corrupt compressed stream: {0}")]
    CorruptStream(&'static str),

    /// The decompressed fork does not match the CRC in its entry header.
    #[error("Fork CRC mismatch: computed {actual:#06x}, stored {expected:#06x}")]
    PayloadCrcMismatch { expected: u16, actual: u16 },

    /// No entry with the given path exists in the archive.
    #[error("No such entry: {0}")]
    NotFound(String),

    /// An I/O error from the backing stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Compression method: Store (no compression)
pub const METHOD_STORE: u8 = 0;
/// Compression method: TableHuff (LZ + nested Huffman tables)
pub const METHOD_TABLEHUFF: u8 = 13;
/// Compression method: Installer (block-structured LZ + per-block Huffman)
pub const METHOD_INSTALLER: u8 = 14;

// Known StuffIt FourCCs. 11H Mac uses ST46, EMI Mac uses ST65.
const MAGIC_NUMBERS: [&[u8; 4]; 9] = [
    b"SIT!", b"ST65", b"ST50", b"ST60", b"STin", b"STi2", b"STi3", b"STi4", b"ST46",
];
const SECONDARY_MAGIC: &[u8; 4] = b"rLau";

// Entry header layout (112 bytes, big-endian fields).
const SITFH_COMPRMETHOD: usize = 0;
const SITFH_COMPDMETHOD: usize = 1;
const SITFH_FNAMESIZE: usize = 2;
const SITFH_FNAME: usize = 3;
const SITFH_FTYPE: usize = 66;
const SITFH_CREATOR: usize = 70;
const SITFH_FNDRFLAGS: usize = 74;
const SITFH_RSRCLENGTH: usize = 84;
const SITFH_DATALENGTH: usize = 88;
const SITFH_COMPRLENGTH: usize = 92;
const SITFH_COMPDLENGTH: usize = 96;
const SITFH_RSRCCRC: usize = 100;
const SITFH_DATACRC: usize = 102;
const SITFH_HDRCRC: usize = 110;
const SIT_ENTRY_SIZE: usize = 112;
const SIT_MAX_NAME: u8 = 31;

// Folder markers in the data-fork method byte, after stripping the 0x80
// (encrypted) and 0x10 (folder contents encrypted) flags.
const SIT_START_FOLDER: u8 = 32;
const SIT_END_FOLDER: u8 = 33;
const SIT_FOLDER_MASK: u8 = 0x6F;

/// IBM CRC16 algorithm (polynomial 0xA001, reflected).
/// This is the XMODEM/ARC-family CRC StuffIt uses for headers and forks.
fn crc16(data: &[u8]) -> u16 {
    let mut crc = 0u16;
    for &b in data {
        crc ^= b as u16;
        for _ in 0..8 {
            if (crc & 0x0001) != 0 {
                crc = (crc >> 1) ^ 0xA001;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}

fn be16(buf: &[u8], off: usize) -> u16 {
    u16::from_be_bytes([buf[off], buf[off + 1]])
}

fn be32(buf: &[u8], off: usize) -> u32 {
    u32::from_be_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

/// Descriptor of one fork's compressed payload inside the archive stream.
#[derive(Debug, Clone, Copy, Default)]
struct ForkEntry {
    uncompressed_size: u32,
    compressed_size: u32,
    offset: u64,
    crc: u16,
    compression: u8,
}

#[derive(Debug, Clone, Default)]
struct FileEntry {
    /// Display path as stored in the archive, decoded from MacRoman.
    path: String,
    data_fork: ForkEntry,
    res_fork: ForkEntry,
}

/// An opened StuffIt archive.
///
/// The index over both forks of every entry is built once at open time;
/// forks are decompressed lazily on each read. The backing stream sits
/// behind a mutex, so reads of different entries may run in parallel --
/// each read holds the lock only while fetching its compressed payload.
#[derive(Debug)]
pub struct SitArchive<R: Read + Seek> {
    stream: Mutex<R>,
    entries: HashMap<String, FileEntry>,
    metadata: HashMap<String, [u8; 16]>,
    flatten_tree: bool,
}

impl SitArchive<BufReader<File>> {
    /// Open an archive from a file on disk.
    pub fn open_file(path: impl AsRef<Path>, flatten_tree: bool) -> Result<Self, SitError> {
        let file = File::open(path)?;
        Self::open(BufReader::new(file), flatten_tree)
    }
}

impl<R: Read + Seek> SitArchive<R> {
    /// Open an archive from a seekable byte stream.
    ///
    /// With `flatten_tree` set, folder markers are ignored and every entry
    /// is keyed by its bare name instead of its full colon-delimited path.
    pub fn open(mut stream: R, flatten_tree: bool) -> Result<Self, SitError> {
        let stream_size = stream.seek(SeekFrom::End(0))?;
        stream.seek(SeekFrom::Start(0))?;

        let mut head = [0u8; 22];
        read_exact_or_truncated(&mut stream, &mut head)?;

        if !MAGIC_NUMBERS.iter().any(|m| m[..] == head[0..4]) {
            return Err(SitError::BadMagic);
        }

        // head[4..6] is the file count; informational only.
        let archive_size = be32(&head, 6) as u64;

        if &head[10..14] != SECONDARY_MAGIC {
            return Err(SitError::BadMagic);
        }
        // head[14] is a version byte, head[15..22] reserved; both ignored.

        let mut entries = HashMap::new();
        let mut metadata = HashMap::new();
        let mut dir_stack: Vec<String> = Vec::new();
        let mut pos = 22u64;

        while pos < archive_size && pos < stream_size {
            let mut header = [0u8; SIT_ENTRY_SIZE];
            read_exact_or_truncated(&mut stream, &mut header)?;
            pos += SIT_ENTRY_SIZE as u64;

            let stored_crc = be16(&header, SITFH_HDRCRC);
            let actual_crc = crc16(&header[..SITFH_HDRCRC]);
            if stored_crc != actual_crc {
                return Err(SitError::HeaderCrcMismatch {
                    expected: stored_crc,
                    actual: actual_crc,
                });
            }

            let res_method = header[SITFH_COMPRMETHOD];
            let data_method = header[SITFH_COMPDMETHOD];

            let name_len = header[SITFH_FNAMESIZE];
            if name_len > SIT_MAX_NAME {
                return Err(SitError::NameTooLong(name_len));
            }
            let name = MACINTOSH
                .decode(&header[SITFH_FNAME..SITFH_FNAME + name_len as usize])
                .0
                .to_string();

            // Folder markers carry no payload.
            let dir_check = data_method & SIT_FOLDER_MASK;
            if dir_check == SIT_START_FOLDER {
                if !flatten_tree {
                    dir_stack.push(name);
                }
                continue;
            }
            if dir_check == SIT_END_FOLDER {
                if !flatten_tree {
                    dir_stack.pop();
                }
                continue;
            }

            let path = if flatten_tree || dir_stack.is_empty() {
                name
            } else {
                format!("{}:{}", dir_stack.join(":"), name)
            };

            let res_ulen = be32(&header, SITFH_RSRCLENGTH);
            let data_ulen = be32(&header, SITFH_DATALENGTH);
            let res_clen = be32(&header, SITFH_COMPRLENGTH);
            let data_clen = be32(&header, SITFH_COMPDLENGTH);

            // Payloads follow the header immediately, resource fork first.
            let end = pos + res_clen as u64 + data_clen as u64;
            if end > stream_size {
                return Err(SitError::Truncated);
            }

            let mut finder = [0u8; 16];
            finder[0..4].copy_from_slice(&header[SITFH_FTYPE..SITFH_FTYPE + 4]);
            finder[4..8].copy_from_slice(&header[SITFH_CREATOR..SITFH_CREATOR + 4]);
            finder[8..10].copy_from_slice(&header[SITFH_FNDRFLAGS..SITFH_FNDRFLAGS + 2]);

            let key = path.to_lowercase();
            metadata.insert(key.clone(), finder);

            if data_ulen != 0 || res_ulen != 0 {
                let mut entry = FileEntry {
                    path: path.clone(),
                    ..Default::default()
                };
                if data_ulen != 0 {
                    entry.data_fork = ForkEntry {
                        uncompressed_size: data_ulen,
                        compressed_size: data_clen,
                        offset: pos + res_clen as u64,
                        crc: be16(&header, SITFH_DATACRC),
                        compression: data_method,
                    };
                    debug!(
                        "StuffIt file '{}' data fork, compression = {}",
                        path, data_method
                    );
                }
                if res_ulen != 0 {
                    entry.res_fork = ForkEntry {
                        uncompressed_size: res_ulen,
                        compressed_size: res_clen,
                        offset: pos,
                        crc: be16(&header, SITFH_RSRCCRC),
                        compression: res_method,
                    };
                    debug!(
                        "StuffIt file '{}' res fork, compression = {}",
                        path, res_method
                    );
                }
                entries.insert(key, entry);
            }

            pos = end;
            stream.seek(SeekFrom::Start(pos))?;
        }

        Ok(Self {
            stream: Mutex::new(stream),
            entries,
            metadata,
            flatten_tree,
        })
    }

    /// Whether an entry with the given path exists.
    pub fn has(&self, path: &str) -> bool {
        self.entries.contains_key(&self.key_for(path))
    }

    /// All entry paths in the archive, in unspecified order.
    pub fn list(&self) -> Vec<String> {
        self.entries.values().map(|e| e.path.clone()).collect()
    }

    /// Read and decompress the data fork of an entry.
    ///
    /// An entry without a data fork yields an empty vector.
    pub fn read(&self, path: &str) -> Result<Vec<u8>, SitError> {
        let entry = self.lookup(path)?;
        if entry.data_fork.uncompressed_size == 0 {
            return Ok(Vec::new());
        }
        self.read_fork(&entry.data_fork)
    }

    /// Read and decompress the resource fork of an entry.
    ///
    /// Returns `None` when the entry has no resource fork, as opposed to
    /// an empty one.
    pub fn read_resource_fork(&self, path: &str) -> Result<Option<Vec<u8>>, SitError> {
        let entry = self.lookup(path)?;
        if entry.res_fork.uncompressed_size == 0 {
            return Ok(None);
        }
        self.read_fork(&entry.res_fork).map(Some)
    }

    /// The 16-byte Finder info block recorded for an entry: type code,
    /// creator code, Finder flags, and six zero bytes.
    pub fn read_finder_info(&self, path: &str) -> Option<[u8; 16]> {
        self.metadata.get(&self.key_for(path)).copied()
    }

    fn lookup(&self, path: &str) -> Result<&FileEntry, SitError> {
        self.entries
            .get(&self.key_for(path))
            .ok_or_else(|| SitError::NotFound(path.to_string()))
    }

    fn key_for(&self, path: &str) -> String {
        let path = if self.flatten_tree {
            path.rsplit(':').next().unwrap_or(path)
        } else {
            path
        };
        path.to_lowercase()
    }

    fn read_fork(&self, fork: &ForkEntry) -> Result<Vec<u8>, SitError> {
        if fork.compression & 0xF0 != 0 {
            return Err(SitError::Encrypted);
        }

        let compressed = {
            let mut stream = self.stream.lock().unwrap_or_else(|e| e.into_inner());
            stream.seek(SeekFrom::Start(fork.offset))?;
            let mut buf = vec![0u8; fork.compressed_size as usize];
            read_exact_or_truncated(&mut *stream, &mut buf)?;
            buf
        };

        let uncompressed = match fork.compression & 0x0F {
            METHOD_STORE => {
                if compressed.len() != fork.uncompressed_size as usize {
                    return Err(SitError::CorruptStream("stored fork size mismatch"));
                }
                compressed
            }
            METHOD_TABLEHUFF => {
                Sit13Decoder::new(&compressed).decompress(fork.uncompressed_size as usize)?
            }
            METHOD_INSTALLER => {
                Sit14Decoder::new(&compressed).decompress(fork.uncompressed_size as usize)?
            }
            method => return Err(SitError::UnsupportedMethod(method)),
        };

        let actual = crc16(&uncompressed);
        if actual != fork.crc {
            return Err(SitError::PayloadCrcMismatch {
                expected: fork.crc,
                actual,
            });
        }

        Ok(uncompressed)
    }
}

fn read_exact_or_truncated<R: Read>(stream: &mut R, buf: &mut [u8]) -> Result<(), SitError> {
    stream.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            SitError::Truncated
        } else {
            SitError::Io(e)
        }
    })
}

// --- BitReader ---

/// LSB-first bit reader over a byte slice.
///
/// Bits come out of the least-significant end of each byte first;
/// multi-bit reads concatenate low-to-high. Reads past the end of input
/// yield zeros, with `eos` reporting when the real bits ran out.
struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
    bit_buf: u64,
    bits_in_buf: u32,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            bit_buf: 0,
            bits_in_buf: 0,
        }
    }

    fn fill(&mut self) {
        while self.bits_in_buf <= 56 && self.pos < self.data.len() {
            self.bit_buf |= (self.data[self.pos] as u64) << self.bits_in_buf;
            self.pos += 1;
            self.bits_in_buf += 8;
        }
    }

    /// Next `n` bits without consuming them, zero-padded past the end.
    fn peek(&mut self, n: u32) -> u32 {
        debug_assert!(n >= 1 && n <= 16);
        self.fill();
        (self.bit_buf & ((1u64 << n) - 1)) as u32
    }

    /// Consume and return `n` bits (`n <= 32`), zero-padded past the end.
    fn take(&mut self, n: u32) -> u32 {
        debug_assert!(n <= 32);
        self.fill();
        let out = (self.bit_buf & ((1u64 << n) - 1)) as u32;
        let consumed = n.min(self.bits_in_buf);
        self.bit_buf >>= consumed;
        self.bits_in_buf -= consumed;
        out
    }

    fn take1(&mut self) -> bool {
        self.take(1) != 0
    }

    /// Discard bits up to the next byte boundary.
    fn align_to_byte(&mut self) {
        let partial = self.bits_in_buf % 8;
        if partial != 0 {
            self.bit_buf >>= partial;
            self.bits_in_buf -= partial;
        }
    }

    /// True once every real input bit has been consumed.
    fn eos(&self) -> bool {
        self.bits_in_buf == 0 && self.pos >= self.data.len()
    }
}

// --- Method 13 (TableHuff) ---
//
// Three canonical Huffman trees drive an LZ loop over a 64 KiB window:
// one literal/length tree used after a literal, a second used after a
// back reference, and an offset-prefix tree. Each tree is a 4096-slot
// table indexed by the next 12 bits, with codes longer than 12 bits
// spilling into an arena of binary overflow nodes.

const SIT13_LOOKUP_BITS: u32 = 12;
const SIT13_LOOKUP_SIZE: usize = 1 << SIT13_LOOKUP_BITS;
const SIT13_OVERFLOW_MARK: i8 = 0x1F;
const SIT13_OVERFLOW_NODES: usize = 0xE08;
const SIT13_ALPHABET: usize = 0x141;
const SIT13_END: u16 = 0x140;
const SIT13_WINDOW_SIZE: usize = 0x10000;

/// One slot of a 12-bit lookup table: the decoded symbol and how many
/// bits its code occupies, or an overflow-node index when `bits` is the
/// `SIT13_OVERFLOW_MARK` sentinel.
#[derive(Debug, Clone, Copy, Default)]
struct Sit13Entry {
    data: u16,
    bits: i8,
}

#[derive(Debug, Clone, Copy)]
struct Sit13Node {
    symbol: i16,
    zero: u16,
    one: u16,
}

/// Arena of overflow-tree nodes shared by all tables of one decode.
/// Children are indices; node 0 is reserved as the null child.
struct Sit13Overflow {
    nodes: Vec<Sit13Node>,
    next: u16,
}

impl Sit13Overflow {
    fn new() -> Self {
        Self {
            nodes: vec![
                Sit13Node {
                    symbol: -1,
                    zero: 0,
                    one: 0,
                };
                SIT13_OVERFLOW_NODES
            ],
            next: 1,
        }
    }

    fn alloc(&mut self) -> Result<u16, SitError> {
        let id = self.next;
        if id as usize >= self.nodes.len() {
            return Err(SitError::CorruptStream("huffman overflow arena exhausted"));
        }
        self.next += 1;
        Ok(id)
    }
}

/// A `(symbol, code length)` pair; length -1 marks an absent symbol.
#[derive(Debug, Clone, Copy)]
struct Sit13Code {
    symbol: u16,
    len: i8,
}

/// Write one canonical code into a lookup table. `code` is the
/// bit-reversed (LSB-first) code pattern; codes longer than 12 bits walk
/// into the overflow arena one bit at a time.
fn sit13_insert(
    table: &mut [Sit13Entry],
    overflow: &mut Sit13Overflow,
    code: u32,
    len: u16,
    symbol: u16,
) -> Result<(), SitError> {
    if len as u32 <= SIT13_LOOKUP_BITS {
        let mut i = code as usize;
        while i < SIT13_LOOKUP_SIZE {
            table[i] = Sit13Entry {
                data: symbol,
                bits: len as i8,
            };
            i += 1 << len;
        }
    } else {
        let slot = (code as usize) & (SIT13_LOOKUP_SIZE - 1);
        if table[slot].bits != SIT13_OVERFLOW_MARK {
            table[slot].bits = SIT13_OVERFLOW_MARK;
            table[slot].data = overflow.alloc()?;
        }
        let mut node = table[slot].data as usize;
        let mut rest = code >> SIT13_LOOKUP_BITS;
        for _ in SIT13_LOOKUP_BITS..len as u32 {
            let existing = if rest & 1 != 0 {
                overflow.nodes[node].one
            } else {
                overflow.nodes[node].zero
            };
            let child = if existing == 0 {
                let fresh = overflow.alloc()?;
                if rest & 1 != 0 {
                    overflow.nodes[node].one = fresh;
                } else {
                    overflow.nodes[node].zero = fresh;
                }
                fresh
            } else {
                existing
            };
            node = child as usize;
            rest >>= 1;
        }
        overflow.nodes[node].symbol = symbol as i16;
    }
    Ok(())
}

/// Build a lookup table from `(symbol, length)` pairs: sort by length
/// then symbol, assign canonical codes, insert each bit-reversed.
fn sit13_build(
    table: &mut [Sit13Entry],
    overflow: &mut Sit13Overflow,
    codes: &mut [Sit13Code],
) -> Result<(), SitError> {
    codes.sort_unstable_by(|a, b| a.len.cmp(&b.len).then(a.symbol.cmp(&b.symbol)));

    let mut acc: u32 = 0;
    let mut step: u32 = 0;
    let mut cur: i8 = 0;
    for c in codes.iter() {
        acc = acc.wrapping_add(step);
        if c.len != cur {
            cur = c.len;
            if cur > 31 {
                return Err(SitError::CorruptStream("huffman code length out of range"));
            }
            step = if cur <= 0 { 0 } else { 1u32 << (32 - cur as u32) };
        }
        if cur > 0 {
            sit13_insert(table, overflow, acc.reverse_bits(), cur as u16, c.symbol)?;
        }
    }
    Ok(())
}

fn sit13_build_static(
    table: &mut [Sit13Entry],
    overflow: &mut Sit13Overflow,
    lengths: &[u8],
) -> Result<(), SitError> {
    let mut codes: Vec<Sit13Code> = lengths
        .iter()
        .enumerate()
        .map(|(i, &l)| Sit13Code {
            symbol: i as u16,
            len: l as i8,
        })
        .collect();
    sit13_build(table, overflow, &mut codes)
}

/// Decode one symbol: peek 12 bits for the fast path, otherwise consume
/// the 12-bit prefix and walk the overflow tree bit by bit.
fn sit13_decode(
    bits: &mut BitReader,
    table: &[Sit13Entry],
    overflow: &Sit13Overflow,
) -> Result<u16, SitError> {
    let slot = table[bits.peek(SIT13_LOOKUP_BITS) as usize];
    if slot.bits == 0 {
        return Err(SitError::CorruptStream("undefined huffman code"));
    }
    if slot.bits != SIT13_OVERFLOW_MARK {
        bits.take(slot.bits as u32);
        return Ok(slot.data);
    }
    bits.take(SIT13_LOOKUP_BITS);
    let mut node = slot.data as usize;
    loop {
        let n = overflow.nodes[node];
        if n.symbol >= 0 {
            return Ok(n.symbol as u16);
        }
        let child = if bits.take1() { n.one } else { n.zero };
        if child == 0 {
            return Err(SitError::CorruptStream("undefined huffman code"));
        }
        node = child as usize;
    }
}

/// Expand one static profile into its 658 codelengths: two 0x141-entry
/// primary tables followed by the offset-prefix table. The lengths are
/// nibble-packed deltas: 0 subtracts the next nibble from the running
/// length, 15 adds it, anything else adds `nibble - 7`.
fn sit13_static_lengths(profile: u8) -> [u8; 658] {
    let mut out = [0u8; 658];
    let mut idx = SIT13_STATIC_POS[(profile - 1) as usize];
    let mut high = (profile & 1) != 0;
    let mut len = 0u8;

    let next_nibble = |idx: &mut usize, high: &mut bool| -> u8 {
        let b = SIT13_STATIC[*idx];
        let k = if *high {
            b >> 4
        } else {
            *idx += 1;
            b & 0xF
        };
        *high = !*high;
        k
    };

    for slot in out.iter_mut() {
        let k = next_nibble(&mut idx, &mut high);
        if k == 0 {
            len = len.wrapping_sub(next_nibble(&mut idx, &mut high));
        } else if k == 15 {
            len = len.wrapping_add(next_nibble(&mut idx, &mut high));
        } else {
            len = len.wrapping_add(k.wrapping_sub(7));
        }
        *slot = len;
    }
    out
}

/// Read a dynamically transmitted codelength sequence using the fixed
/// 37-symbol codelength alphabet. Symbols below 31 set the running
/// length directly; 31 clears it to "absent"; 32/33 adjust it by one;
/// 34..36 are repeat escapes. Every symbol also emits the running length
/// once.
fn sit13_read_lengths(
    bits: &mut BitReader,
    meta: &[Sit13Entry],
    overflow: &Sit13Overflow,
    count: usize,
) -> Result<Vec<Sit13Code>, SitError> {
    let mut codes: Vec<Sit13Code> = (0..count)
        .map(|i| Sit13Code {
            symbol: i as u16,
            len: 0,
        })
        .collect();

    let mut cur: i8 = 0;
    let mut i = 0usize;
    while i < count {
        let sym = sit13_decode(bits, meta, overflow)?;
        match sym {
            31 => cur = -1,
            32 => cur = cur.wrapping_add(1),
            33 => cur = cur.wrapping_sub(1),
            34 => {
                if bits.take1() {
                    codes[i].len = cur;
                    i += 1;
                }
            }
            35 => {
                let mut reps = bits.take(3) + 2;
                while reps > 0 {
                    if i >= count {
                        return Err(SitError::CorruptStream("codelength run overflows table"));
                    }
                    codes[i].len = cur;
                    i += 1;
                    reps -= 1;
                }
            }
            36 => {
                let mut reps = bits.take(6) + 10;
                while reps > 0 {
                    if i >= count {
                        return Err(SitError::CorruptStream("codelength run overflows table"));
                    }
                    codes[i].len = cur;
                    i += 1;
                    reps -= 1;
                }
            }
            _ => cur = sym as i8 + 1,
        }
        if i >= count {
            break;
        }
        codes[i].len = cur;
        i += 1;
    }
    Ok(codes)
}

struct Sit13Decoder<'a> {
    reader: BitReader<'a>,
}

impl<'a> Sit13Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(data),
        }
    }

    fn decompress(&mut self, uncomp_len: usize) -> Result<Vec<u8>, SitError> {
        let bits = &mut self.reader;

        let mut overflow = Sit13Overflow::new();
        let mut meta = vec![Sit13Entry::default(); SIT13_LOOKUP_SIZE];
        for (i, (&code, &len)) in SIT13_META_CODES
            .iter()
            .zip(SIT13_META_CODE_BITS.iter())
            .enumerate()
        {
            sit13_insert(&mut meta, &mut overflow, code, len, i as u16)?;
        }

        let mut literals = vec![Sit13Entry::default(); SIT13_LOOKUP_SIZE];
        let mut literals_after_match = vec![Sit13Entry::default(); SIT13_LOOKUP_SIZE];
        let mut offsets = vec![Sit13Entry::default(); SIT13_LOOKUP_SIZE];

        let ctrl = bits.take(8);
        let mode = ctrl >> 4;
        if mode > 5 {
            return Err(SitError::CorruptStream("bad tablehuff mode byte"));
        }

        if mode != 0 {
            let profile = mode as u8;
            let lengths = sit13_static_lengths(profile);
            debug_assert!((profile as usize) <= SIT13_STATIC_BITS.len());
            let offset_count = SIT13_STATIC_BITS[profile as usize - 1];

            sit13_build_static(&mut literals, &mut overflow, &lengths[..SIT13_ALPHABET])?;
            sit13_build_static(
                &mut literals_after_match,
                &mut overflow,
                &lengths[SIT13_ALPHABET..2 * SIT13_ALPHABET],
            )?;
            sit13_build_static(
                &mut offsets,
                &mut overflow,
                &lengths[2 * SIT13_ALPHABET..2 * SIT13_ALPHABET + offset_count],
            )?;
        } else {
            let mut codes = sit13_read_lengths(bits, &meta, &overflow, SIT13_ALPHABET)?;
            sit13_build(&mut literals, &mut overflow, &mut codes)?;

            if ctrl & 8 != 0 {
                literals_after_match.copy_from_slice(&literals);
            } else {
                let mut codes = sit13_read_lengths(bits, &meta, &overflow, SIT13_ALPHABET)?;
                sit13_build(&mut literals_after_match, &mut overflow, &mut codes)?;
            }

            let offset_count = (ctrl & 7) as usize + 10;
            let mut codes = sit13_read_lengths(bits, &meta, &overflow, offset_count)?;
            sit13_build(&mut offsets, &mut overflow, &mut codes)?;
        }

        let mut out = Vec::with_capacity(uncomp_len);
        let mut window = vec![0u8; SIT13_WINDOW_SIZE];
        let mut wpos = 0usize;
        let mut after_match = false;

        while !bits.eos() {
            let table = if after_match {
                &literals_after_match
            } else {
                &literals
            };
            let sym = sit13_decode(bits, table, &overflow)?;

            if sym < 0x100 {
                if out.len() >= uncomp_len {
                    return Err(SitError::CorruptStream("output overrun"));
                }
                let b = sym as u8;
                out.push(b);
                window[wpos] = b;
                wpos = (wpos + 1) & (SIT13_WINDOW_SIZE - 1);
                after_match = false;
                continue;
            }

            after_match = true;
            let len = if sym < 0x13E {
                (sym - 0x100 + 3) as u32
            } else if sym == 0x13E {
                bits.take(10) + 65
            } else if sym == SIT13_END {
                if out.len() != uncomp_len {
                    return Err(SitError::CorruptStream("short tablehuff stream"));
                }
                return Ok(out);
            } else {
                bits.take(15) + 65
            };

            let prefix = sit13_decode(bits, &offsets, &overflow)? as u32;
            let raw = if prefix == 0 {
                0
            } else {
                (1u32 << (prefix - 1)) | bits.take(prefix - 1)
            };

            let mut src = (wpos + SIT13_WINDOW_SIZE).wrapping_sub(raw as usize + 1);
            for _ in 0..len {
                src &= SIT13_WINDOW_SIZE - 1;
                let b = window[src];
                src += 1;
                if out.len() >= uncomp_len {
                    return Err(SitError::CorruptStream("output overrun"));
                }
                out.push(b);
                window[wpos] = b;
                wpos = (wpos + 1) & (SIT13_WINDOW_SIZE - 1);
            }
        }

        Err(SitError::CorruptStream("unexpected end of tablehuff stream"))
    }
}

// --- Method 14 (Installer) ---
//
// Block-structured: each block carries its own literal/length tree (308
// symbols) and offset tree (75 symbols), both transmitted as codelength
// sequences with an optional nested codelength tree, and realigns to a
// byte boundary when done. The 256 KiB window persists across blocks.

const SIT14_LITERAL_ALPHABET: usize = 308;
const SIT14_OFFSET_ALPHABET: usize = 75;
const SIT14_WINDOW_SIZE: usize = 0x40000;
const SIT14_MAX_TREE_DEPTH: u32 = 4;

/// Sort codelengths ascending, carrying the symbol permutation along.
///
/// Equal lengths must come out in the order this exact partitioning
/// leaves them: the format assigns canonical codes by sorted position,
/// so the tie behavior is part of the wire format and a library sort
/// cannot be substituted.
fn sit14_sort_lengths(mut first: usize, mut last: usize, code: &mut [u8], order: &mut [u16]) {
    while last - first > 1 {
        let mut i = first;
        let mut j = last;

        loop {
            loop {
                i += 1;
                if !(i < last && code[first] > code[i]) {
                    break;
                }
            }
            loop {
                j -= 1;
                if !(j > first && code[first] < code[j]) {
                    break;
                }
            }
            if j <= i {
                break;
            }
            code.swap(i, j);
            order.swap(i, j);
        }

        if first == j {
            first += 1;
            continue;
        }

        code.swap(first, j);
        order.swap(first, j);

        let mid = j + 1;
        if last - mid <= j - first {
            sit14_sort_lengths(mid, last, code, order);
            last = j;
        } else {
            sit14_sort_lengths(first, j, code, order);
            first = mid;
        }
    }
}

/// Walk a flat two-children-per-node tree until a leaf. Leaves are
/// encoded as `2 * codesize + symbol`; slot value 0 marks an undefined
/// code.
fn sit14_walk(bits: &mut BitReader, tree: &[u16], codesize: usize) -> Result<u32, SitError> {
    let leaf_base = (codesize * 2) as u32;
    let mut node = 0usize;
    for _ in 0..tree.len() {
        let slot = node + bits.take1() as usize;
        let next = *tree
            .get(slot)
            .ok_or(SitError::CorruptStream("huffman walk out of range"))? as u32;
        if next >= leaf_base {
            return Ok(next - leaf_base);
        }
        if next == 0 {
            return Err(SitError::CorruptStream("undefined huffman code"));
        }
        node = next as usize;
    }
    Err(SitError::CorruptStream("huffman walk does not terminate"))
}

/// Read one transmitted Huffman tree of `codesize` symbols and return it
/// as a flat node array.
///
/// The header selects a bucket width, a length bias, and whether the
/// codelengths are raw fields or themselves Huffman-coded by a nested,
/// recursively transmitted tree. The all-ones bucket value means "repeat
/// the previous length 3+n times"; with the leading flag set, the value
/// below it means "absent". Ends byte-aligned.
fn sit14_read_tree(
    bits: &mut BitReader,
    codesize: usize,
    depth: u32,
) -> Result<Vec<u16>, SitError> {
    if depth > SIT14_MAX_TREE_DEPTH {
        return Err(SitError::CorruptStream("nested tree recursion too deep"));
    }

    let zero_flag = bits.take1();
    let width = bits.take(2) + 2;
    let bias = bits.take(3) + 1;
    let size = 1usize << width;
    let repeat_mark = (size - 1) as u32;
    let zero_mark = if zero_flag { repeat_mark - 1 } else { u32::MAX };
    let nested = bits.take(2) & 1 != 0;

    let mut lengths = vec![0u8; codesize];

    if nested {
        let subtree = sit14_read_tree(bits, size, depth + 1)?;
        let mut i = 0usize;
        while i < codesize {
            let v = sit14_walk(bits, &subtree, size)?;
            if v == zero_mark {
                lengths[i] = 0;
                i += 1;
            } else if v == repeat_mark {
                let reps = sit14_walk(bits, &subtree, size)? + 3;
                for _ in 0..reps {
                    if i == 0 || i >= codesize {
                        return Err(SitError::CorruptStream("codelength run out of range"));
                    }
                    lengths[i] = lengths[i - 1];
                    i += 1;
                }
            } else {
                lengths[i] = (v + bias) as u8;
                i += 1;
            }
        }
    } else {
        let mut i = 0usize;
        while i < codesize {
            let v = bits.take(width);
            if v == zero_mark {
                lengths[i] = 0;
                i += 1;
            } else if v == repeat_mark {
                let reps = bits.take(width) + 3;
                for _ in 0..reps {
                    if i == 0 || i >= codesize {
                        return Err(SitError::CorruptStream("codelength run out of range"));
                    }
                    lengths[i] = lengths[i - 1];
                    i += 1;
                }
            } else {
                lengths[i] = (v + bias) as u8;
                i += 1;
            }
        }
    }

    // Canonical code assignment over the sorted lengths.
    let mut sorted = lengths.clone();
    let mut order: Vec<u16> = (0..codesize as u16).collect();
    sit14_sort_lengths(0, codesize, &mut sorted, &mut order);

    let mut codes = vec![0u32; codesize];
    let mut i = sorted.iter().position(|&l| l != 0).unwrap_or(codesize);
    let mut code: u32 = 0;
    while i < codesize {
        if i != 0 {
            let shift = (sorted[i] - sorted[i - 1]) as u32;
            if shift > 31 {
                return Err(SitError::CorruptStream("huffman code length out of range"));
            }
            code <<= shift;
        }
        // Store the code bit-reversed so decoding consumes LSB-first.
        let mut rev: u32 = 0;
        let mut tmp = code;
        for _ in 0..sorted[i] {
            rev = (rev << 1) | (tmp & 1);
            tmp >>= 1;
        }
        codes[order[i] as usize] = rev;
        i += 1;
        code += 1;
    }

    let mut tree = vec![0u16; codesize * 2];
    let mut next: u16 = 2;
    for (sym, (&len, &rev)) in lengths.iter().zip(codes.iter()).enumerate() {
        let mut node = 0usize;
        let mut path = rev;
        for step in 0..len {
            node += (path & 1) as usize;
            if step + 1 == len {
                tree[node] = (codesize * 2 + sym) as u16;
            } else {
                if tree[node] == 0 {
                    if (next as usize) + 1 >= tree.len() {
                        return Err(SitError::CorruptStream("oversubscribed huffman tree"));
                    }
                    tree[node] = next;
                    next += 2;
                }
                node = tree[node] as usize;
                if node + 1 >= tree.len() {
                    return Err(SitError::CorruptStream("oversubscribed huffman tree"));
                }
            }
            path >>= 1;
        }
    }

    bits.align_to_byte();
    Ok(tree)
}

struct Sit14Decoder<'a> {
    reader: BitReader<'a>,
}

impl<'a> Sit14Decoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(data),
        }
    }

    fn decompress(&mut self, uncomp_len: usize) -> Result<Vec<u8>, SitError> {
        let bits = &mut self.reader;

        // Length codes: base 4 at code 0, extra bits growing every four
        // codes from code 4 on. Offset codes: base 1, growing from code 3.
        let mut len_extra = [0u8; 52];
        let mut len_base = [0u16; 52];
        let mut acc = 0u16;
        for i in 0..52 {
            len_base[i] = acc;
            len_extra[i] = if i >= 4 { ((i - 4) >> 2) as u8 } else { 0 };
            acc += 1 << len_extra[i];
        }

        let mut off_extra = [0u8; 75];
        let mut off_base = [0u32; 75];
        let mut acc = 1u32;
        for i in 0..75 {
            off_base[i] = acc;
            off_extra[i] = if i >= 3 { ((i - 3) >> 2) as u8 } else { 0 };
            acc += 1 << off_extra[i];
        }

        let mut out = Vec::with_capacity(uncomp_len);
        let mut window = vec![0u8; SIT14_WINDOW_SIZE];
        let mut wpos = 0usize;

        let blocks = bits.take(16);
        for _ in 0..blocks {
            if bits.eos() {
                break;
            }

            // Crunched block size; not relied upon.
            bits.take(16);
            bits.take(16);
            let mut remaining = bits.take(16);
            remaining |= bits.take(16) << 16;

            let literal_tree = sit14_read_tree(bits, SIT14_LITERAL_ALPHABET, 0)?;
            let offset_tree = sit14_read_tree(bits, SIT14_OFFSET_ALPHABET, 0)?;

            while remaining > 0 && !bits.eos() {
                let sym = sit14_walk(bits, &literal_tree, SIT14_LITERAL_ALPHABET)?;

                if sym < 0x100 {
                    if out.len() >= uncomp_len {
                        return Err(SitError::CorruptStream("output overrun"));
                    }
                    let b = sym as u8;
                    out.push(b);
                    window[wpos] = b;
                    wpos = (wpos + 1) & (SIT14_WINDOW_SIZE - 1);
                    remaining -= 1;
                    continue;
                }

                let code = (sym - 0x100) as usize;
                let mut len = len_base[code] as u32 + 4;
                if len_extra[code] != 0 {
                    len += bits.take(len_extra[code] as u32);
                }

                let code = sit14_walk(bits, &offset_tree, SIT14_OFFSET_ALPHABET)? as usize;
                let mut offset = off_base[code];
                if off_extra[code] != 0 {
                    offset += bits.take(off_extra[code] as u32);
                }

                if len > remaining {
                    return Err(SitError::CorruptStream("back reference overruns block"));
                }
                remaining -= len;

                let mut src = (wpos + SIT14_WINDOW_SIZE).wrapping_sub(offset as usize);
                for _ in 0..len {
                    src &= SIT14_WINDOW_SIZE - 1;
                    let b = window[src];
                    src += 1;
                    if out.len() >= uncomp_len {
                        return Err(SitError::CorruptStream("output overrun"));
                    }
                    out.push(b);
                    window[wpos] = b;
                    wpos = (wpos + 1) & (SIT14_WINDOW_SIZE - 1);
                }
            }

            bits.align_to_byte();
        }

        if out.len() != uncomp_len {
            return Err(SitError::CorruptStream("short installer stream"));
        }
        Ok(out)
    }
}

// --- Method 13 static tables ---
//
// The 37-symbol codelength alphabet has fixed, already bit-reversed code
// patterns; the five static profiles are nibble-packed codelength deltas.
// None of these are derivable.

const SIT13_META_CODES: [u32; 37] = [
    0x5D8, 0x058, 0x040, 0x0C0, 0x000, 0x078, 0x02B, 0x014,
    0x00C, 0x01C, 0x01B, 0x00B, 0x010, 0x020, 0x038, 0x018,
    0x0D8, 0xBD8, 0x180, 0x680, 0x380, 0xF80, 0x780, 0x480,
    0x080, 0x280, 0x3D8, 0xFD8, 0x7D8, 0x9D8, 0x1D8, 0x004,
    0x001, 0x002, 0x007, 0x003, 0x008,
];

const SIT13_META_CODE_BITS: [u16; 37] = [
    11, 8, 8, 8, 8, 7, 6, 5, 5, 5, 5, 6, 5, 6, 7, 7,
    9, 12, 10, 11, 11, 12, 12, 11, 11, 11, 12, 12, 12, 12, 12, 5,
    2, 2, 3, 4, 5,
];

const SIT13_STATIC_POS: [usize; 5] = [0, 330, 661, 991, 1323];

const SIT13_STATIC_BITS: [usize; 5] = [11, 13, 14, 11, 11];

const SIT13_STATIC: [u8; 1655] = [
    0xB8, 0x98, 0x78, 0x77, 0x75, 0x97, 0x76, 0x87, 0x77, 0x77, 0x77, 0x78,
    0x67, 0x87, 0x68, 0x67, 0x3B, 0x77, 0x78, 0x67, 0x77, 0x77, 0x77, 0x59,
    0x76, 0x87, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x76, 0x87, 0x67, 0x87,
    0x77, 0x77, 0x75, 0x88, 0x59, 0x75, 0x79, 0x77, 0x78, 0x68, 0x77, 0x67,
    0x73, 0xB6, 0x65, 0xB6, 0x76, 0x97, 0x67, 0x47, 0x9A, 0x2A, 0x4A, 0x87,
    0x77, 0x78, 0x67, 0x86, 0x78, 0x77, 0x77, 0x77, 0x68, 0x77, 0x77, 0x77,
    0x68, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x68, 0x77, 0x77, 0x77,
    0x67, 0x87, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x68, 0x77, 0x77,
    0x68, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x77, 0x68, 0x77, 0x77, 0x77, 0x77, 0x77, 0x67, 0x87,
    0x68, 0x77, 0x77, 0x77, 0x68, 0x77, 0x68, 0x63, 0x86, 0x7A, 0x87, 0x77,
    0x77, 0x87, 0x76, 0x87, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x77, 0x76, 0x86, 0x77, 0x86, 0x86, 0x86, 0x86, 0x87, 0x76, 0x86, 0x87,
    0x67, 0x74, 0xA7, 0x86, 0x36, 0x88, 0x78, 0x76, 0x87, 0x76, 0x96, 0x87,
    0x77, 0x84, 0xA6, 0x86, 0x87, 0x76, 0x92, 0xB5, 0x94, 0xA6, 0x96, 0x85,
    0x78, 0x75, 0x96, 0x86, 0x86, 0x75, 0xA7, 0x67, 0x87, 0x85, 0x87, 0x85,
    0x95, 0x77, 0x77, 0x85, 0xA3, 0xA7, 0x93, 0x87, 0x86, 0x94, 0x85, 0xA8,
    0x67, 0x85, 0xA5, 0x95, 0x86, 0x68, 0x67, 0x77, 0x96, 0x78, 0x75, 0x86,
    0x77, 0xA5, 0x67, 0x87, 0x85, 0xA6, 0x75, 0x96, 0x85, 0x87, 0x95, 0x95,
    0x87, 0x86, 0x94, 0xA5, 0x86, 0x85, 0x87, 0x86, 0x86, 0x86, 0x86, 0x77,
    0x67, 0x76, 0x66, 0x9A, 0x75, 0xA5, 0x94, 0x97, 0x76, 0x96, 0x76, 0x95,
    0x86, 0x77, 0x86, 0x87, 0x75, 0xA5, 0x96, 0x85, 0x86, 0x96, 0x86, 0x86,
    0x85, 0x96, 0x86, 0x76, 0x95, 0x86, 0x95, 0x95, 0x95, 0x87, 0x76, 0x87,
    0x76, 0x96, 0x85, 0x78, 0x75, 0xA6, 0x85, 0x86, 0x95, 0x86, 0x95, 0x86,
    0x45, 0x69, 0x78, 0x77, 0x87, 0x67, 0x69, 0x58, 0x79, 0x68, 0x78, 0x87,
    0x78, 0x66, 0x88, 0x68, 0x68, 0x77, 0x76, 0x87, 0x68, 0x68, 0x69, 0x58,
    0x5A, 0x4B, 0x76, 0x88, 0x69, 0x67, 0xA7, 0x70, 0x9F, 0x90, 0xA4, 0x84,
    0x77, 0x77, 0x77, 0x89, 0x17, 0x77, 0x7B, 0xA7, 0x86, 0x87, 0x77, 0x68,
    0x68, 0x69, 0x67, 0x78, 0x77, 0x78, 0x76, 0x87, 0x77, 0x76, 0x73, 0xB6,
    0x87, 0x96, 0x66, 0x87, 0x76, 0x85, 0x87, 0x78, 0x77, 0x77, 0x86, 0x77,
    0x86, 0x78, 0x66, 0x76, 0x77, 0x87, 0x86, 0x78, 0x76, 0x76, 0x86, 0xA5,
    0x67, 0x97, 0x77, 0x87, 0x87, 0x76, 0x66, 0x59, 0x67, 0x59, 0x77, 0x6A,
    0x65, 0x86, 0x78, 0x94, 0x77, 0x88, 0x77, 0x78, 0x86, 0x86, 0x76, 0x88,
    0x76, 0x87, 0x67, 0x87, 0x77, 0x77, 0x76, 0x87, 0x86, 0x77, 0x77, 0x77,
    0x86, 0x86, 0x76, 0x96, 0x77, 0x77, 0x76, 0x78, 0x86, 0x86, 0x86, 0x95,
    0x86, 0x96, 0x85, 0x95, 0x86, 0x87, 0x75, 0x88, 0x77, 0x87, 0x57, 0x78,
    0x76, 0x86, 0x76, 0x96, 0x86, 0x87, 0x76, 0x87, 0x86, 0x76, 0x77, 0x86,
    0x78, 0x78, 0x57, 0x87, 0x86, 0x76, 0x85, 0xA5, 0x87, 0x76, 0x86, 0x86,
    0x85, 0x86, 0x53, 0x98, 0x78, 0x78, 0x77, 0x87, 0x79, 0x67, 0x79, 0x85,
    0x87, 0x69, 0x67, 0x68, 0x78, 0x69, 0x68, 0x69, 0x58, 0x87, 0x66, 0x97,
    0x68, 0x68, 0x76, 0x85, 0x78, 0x87, 0x67, 0x97, 0x67, 0x74, 0xA2, 0x28,
    0x77, 0x78, 0x77, 0x77, 0x78, 0x68, 0x67, 0x78, 0x77, 0x78, 0x68, 0x68,
    0x77, 0x59, 0x67, 0x5A, 0x68, 0x68, 0x68, 0x68, 0x68, 0x68, 0x67, 0x77,
    0x78, 0x68, 0x68, 0x78, 0x59, 0x58, 0x76, 0x77, 0x68, 0x78, 0x68, 0x59,
    0x69, 0x58, 0x68, 0x68, 0x67, 0x78, 0x77, 0x78, 0x69, 0x58, 0x68, 0x57,
    0x78, 0x67, 0x78, 0x76, 0x88, 0x58, 0x67, 0x7A, 0x46, 0x88, 0x77, 0x78,
    0x68, 0x68, 0x66, 0x78, 0x78, 0x68, 0x68, 0x59, 0x68, 0x69, 0x68, 0x59,
    0x67, 0x78, 0x59, 0x58, 0x69, 0x59, 0x67, 0x68, 0x67, 0x69, 0x69, 0x57,
    0x79, 0x68, 0x59, 0x59, 0x59, 0x68, 0x68, 0x68, 0x58, 0x78, 0x67, 0x59,
    0x68, 0x78, 0x59, 0x58, 0x78, 0x58, 0x76, 0x78, 0x68, 0x68, 0x68, 0x69,
    0x59, 0x67, 0x68, 0x69, 0x59, 0x59, 0x58, 0x69, 0x59, 0x59, 0x58, 0x5A,
    0x58, 0x68, 0x68, 0x59, 0x58, 0x68, 0x66, 0x47, 0x88, 0x77, 0x87, 0x77,
    0x87, 0x76, 0x87, 0x87, 0x87, 0x77, 0x77, 0x87, 0x67, 0x96, 0x78, 0x76,
    0x87, 0x68, 0x77, 0x77, 0x76, 0x86, 0x96, 0x86, 0x88, 0x77, 0x85, 0x86,
    0x8B, 0x76, 0x0A, 0xF9, 0x07, 0x38, 0x57, 0x67, 0x77, 0x78, 0x77, 0x91,
    0x77, 0xD7, 0x77, 0x7A, 0x67, 0x3C, 0x68, 0x68, 0x77, 0x68, 0x78, 0x59,
    0x77, 0x68, 0x77, 0x68, 0x76, 0x77, 0x69, 0x68, 0x68, 0x68, 0x68, 0x67,
    0x68, 0x68, 0x77, 0x87, 0x77, 0x67, 0x78, 0x68, 0x67, 0x58, 0x78, 0x68,
    0x77, 0x68, 0x78, 0x67, 0x68, 0x68, 0x67, 0x78, 0x77, 0x77, 0x87, 0x77,
    0x76, 0x67, 0x86, 0x85, 0x87, 0x86, 0x97, 0x58, 0x67, 0x79, 0x57, 0x77,
    0x87, 0x77, 0x87, 0x77, 0x76, 0x59, 0x78, 0x77, 0x77, 0x68, 0x77, 0x77,
    0x76, 0x78, 0x77, 0x77, 0x77, 0x76, 0x87, 0x77, 0x77, 0x68, 0x77, 0x77,
    0x77, 0x67, 0x78, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x68, 0x77,
    0x76, 0x68, 0x87, 0x77, 0x77, 0x77, 0x77, 0x68, 0x77, 0x68, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x77, 0x76, 0x78, 0x77, 0x77, 0x76, 0x87, 0x77, 0x77,
    0x67, 0x78, 0x77, 0x77, 0x76, 0x78, 0x67, 0x68, 0x68, 0x29, 0x77, 0x88,
    0x78, 0x78, 0x77, 0x68, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x4A, 0x77, 0x4A, 0x74, 0x77, 0x77, 0x68, 0xA4, 0x7A, 0x47, 0x76, 0x86,
    0x78, 0x76, 0x7A, 0x4A, 0x83, 0xB2, 0x87, 0x77, 0x87, 0x76, 0x96, 0x86,
    0x96, 0x76, 0x78, 0x87, 0x77, 0x85, 0x87, 0x85, 0x96, 0x65, 0xB5, 0x95,
    0x96, 0x77, 0x77, 0x86, 0x76, 0x86, 0x86, 0x87, 0x86, 0x86, 0x76, 0x96,
    0x96, 0x57, 0x77, 0x85, 0x97, 0x85, 0x86, 0xA5, 0x86, 0x85, 0x87, 0x77,
    0x68, 0x78, 0x77, 0x95, 0x86, 0x75, 0x87, 0x76, 0x86, 0x79, 0x68, 0x84,
    0x96, 0x76, 0xB3, 0x87, 0x77, 0x68, 0x86, 0xA5, 0x77, 0x56, 0xB6, 0x68,
    0x85, 0x93, 0xB6, 0x95, 0x95, 0x85, 0x95, 0xA5, 0x95, 0x95, 0x69, 0x85,
    0x95, 0x85, 0x86, 0x86, 0x97, 0x84, 0x85, 0xB6, 0x84, 0xA5, 0x95, 0xA4,
    0x95, 0x95, 0x95, 0x68, 0x95, 0x66, 0xA6, 0x95, 0x95, 0x95, 0x86, 0x93,
    0xB5, 0x86, 0x77, 0x94, 0x96, 0x95, 0x96, 0x85, 0x68, 0x94, 0x87, 0x95,
    0x86, 0x86, 0x93, 0xB4, 0xA3, 0xB3, 0xA6, 0x86, 0x85, 0x85, 0x96, 0x76,
    0x86, 0x64, 0x69, 0x78, 0x68, 0x78, 0x78, 0x77, 0x67, 0x79, 0x68, 0x79,
    0x59, 0x56, 0x87, 0x98, 0x68, 0x78, 0x76, 0x88, 0x68, 0x68, 0x67, 0x76,
    0x87, 0x68, 0x78, 0x76, 0x78, 0x77, 0x78, 0xA6, 0x80, 0xAF, 0x81, 0x38,
    0x47, 0x67, 0x77, 0x78, 0x77, 0x89, 0x07, 0x79, 0xB7, 0x87, 0x86, 0x86,
    0x87, 0x86, 0x87, 0x76, 0x78, 0x77, 0x87, 0x66, 0x96, 0x86, 0x86, 0x74,
    0xA6, 0x87, 0x86, 0x77, 0x86, 0x77, 0x76, 0x77, 0x77, 0x87, 0x77, 0x77,
    0x77, 0x77, 0x87, 0x65, 0x78, 0x77, 0x78, 0x75, 0x88, 0x85, 0x76, 0x87,
    0x95, 0x77, 0x86, 0x87, 0x86, 0x96, 0x85, 0x76, 0x69, 0x67, 0x59, 0x77,
    0x6A, 0x65, 0x86, 0x78, 0x94, 0x77, 0x88, 0x77, 0x78, 0x85, 0x96, 0x65,
    0x98, 0x77, 0x87, 0x67, 0x86, 0x77, 0x87, 0x66, 0x87, 0x86, 0x86, 0x86,
    0x77, 0x86, 0x86, 0x76, 0x87, 0x86, 0x77, 0x76, 0x87, 0x77, 0x86, 0x86,
    0x86, 0x87, 0x76, 0x95, 0x86, 0x86, 0x87, 0x65, 0x97, 0x86, 0x87, 0x76,
    0x86, 0x86, 0x87, 0x75, 0x88, 0x76, 0x87, 0x76, 0x87, 0x76, 0x77, 0x77,
    0x86, 0x78, 0x76, 0x76, 0x96, 0x78, 0x76, 0x77, 0x86, 0x77, 0x77, 0x76,
    0x96, 0x75, 0x95, 0x56, 0x87, 0x87, 0x87, 0x78, 0x88, 0x67, 0x87, 0x87,
    0x58, 0x87, 0x77, 0x87, 0x77, 0x76, 0x87, 0x96, 0x59, 0x88, 0x37, 0x89,
    0x69, 0x69, 0x84, 0x96, 0x67, 0x77, 0x57, 0x4B, 0x58, 0xB7, 0x80, 0x8E,
    0x0D, 0x78, 0x87, 0x77, 0x87, 0x68, 0x79, 0x49, 0x76, 0x78, 0x77, 0x5A,
    0x67, 0x69, 0x68, 0x68, 0x68, 0x4A, 0x68, 0x69, 0x67, 0x69, 0x59, 0x58,
    0x68, 0x67, 0x69, 0x77, 0x77, 0x69, 0x68, 0x68, 0x66, 0x68, 0x87, 0x68,
    0x77, 0x5A, 0x68, 0x67, 0x68, 0x68, 0x67, 0x78, 0x78, 0x67, 0x6A, 0x59,
    0x67, 0x57, 0x95, 0x78, 0x77, 0x86, 0x88, 0x57, 0x77, 0x68, 0x67, 0x79,
    0x76, 0x76, 0x98, 0x68, 0x75, 0x68, 0x88, 0x58, 0x87, 0x5A, 0x57, 0x79,
    0x67, 0x59, 0x78, 0x49, 0x58, 0x77, 0x79, 0x49, 0x68, 0x59, 0x77, 0x68,
    0x78, 0x48, 0x79, 0x67, 0x68, 0x59, 0x68, 0x68, 0x59, 0x75, 0x6A, 0x68,
    0x76, 0x4C, 0x67, 0x77, 0x78, 0x59, 0x69, 0x56, 0x96, 0x68, 0x68, 0x68,
    0x77, 0x69, 0x67, 0x68, 0x67, 0x78, 0x69, 0x68, 0x58, 0x59, 0x68, 0x68,
    0x69, 0x49, 0x77, 0x59, 0x67, 0x69, 0x67, 0x68, 0x65, 0x48, 0x77, 0x87,
    0x86, 0x96, 0x88, 0x75, 0x87, 0x96, 0x87, 0x95, 0x87, 0x77, 0x68, 0x86,
    0x77, 0x77, 0x96, 0x68, 0x86, 0x77, 0x85, 0x5A, 0x81, 0xD5, 0x95, 0x68,
    0x99, 0x74, 0x98, 0x77, 0x09, 0xF9, 0x0A, 0x5A, 0x66, 0x58, 0x77, 0x87,
    0x91, 0x77, 0x77, 0xE9, 0x77, 0x77, 0x77, 0x76, 0x87, 0x75, 0x97, 0x77,
    0x77, 0x77, 0x78, 0x68, 0x68, 0x68, 0x67, 0x3B, 0x59, 0x77, 0x77, 0x57,
    0x79, 0x57, 0x86, 0x87, 0x67, 0x97, 0x77, 0x57, 0x79, 0x77, 0x77, 0x75,
    0x95, 0x77, 0x79, 0x75, 0x97, 0x57, 0x77, 0x79, 0x58, 0x69, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x75, 0x86, 0x77, 0x87, 0x58, 0x95, 0x78, 0x65, 0x8A,
    0x39, 0x58, 0x87, 0x96, 0x87, 0x77, 0x77, 0x77, 0x86, 0x87, 0x76, 0x78,
    0x77, 0x77, 0x77, 0x68, 0x77, 0x77, 0x77, 0x77, 0x77, 0x68, 0x77, 0x68,
    0x77, 0x67, 0x86, 0x77, 0x78, 0x77, 0x77, 0x77, 0x77, 0x77, 0x68, 0x77,
    0x77, 0x77, 0x77, 0x68, 0x77, 0x68, 0x77, 0x67, 0x78, 0x77, 0x77, 0x68,
    0x68, 0x76, 0x87, 0x68, 0x77, 0x77, 0x77, 0x68, 0x77, 0x77, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x68, 0x77, 0x77, 0x77, 0x68, 0x68, 0x68, 0x76, 0x38,
    0x97, 0x67, 0x79, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x78, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77, 0x77,
    0x77, 0x77, 0x77, 0x68, 0x72, 0xC5, 0x86, 0x86, 0x98, 0x77, 0x86, 0x78,
    0x1C, 0x85, 0x2E, 0x77, 0x77, 0x77, 0x87, 0x86, 0x76, 0x86, 0x86, 0xA0,
    0xBD, 0x49, 0x97, 0x66, 0x48, 0x88, 0x48, 0x68, 0x86, 0x78, 0x77, 0x77,
    0x78, 0x66, 0xA6, 0x87, 0x83, 0x85, 0x88, 0x78, 0x66, 0xA7, 0x56, 0x87,
    0x6A, 0x46, 0x89, 0x76, 0xA7, 0x76, 0x87, 0x74, 0xA2, 0x86, 0x77, 0x79,
    0x66, 0xB6, 0x48, 0x67, 0x8A, 0x36, 0x88, 0x77, 0xA5, 0xA5, 0xB1, 0xE9,
    0x39, 0x78, 0x78, 0x75, 0x87, 0x77, 0x77, 0x77, 0x68, 0x58, 0x79, 0x69,
    0x4A, 0x59, 0x29, 0x6A, 0x3C, 0x3B, 0x46, 0x78, 0x75, 0x89, 0x76, 0x89,
    0x4A, 0x56, 0x88, 0x3B, 0x66, 0x88, 0x68, 0x87, 0x57, 0x97, 0x38, 0x87,
    0x56, 0xB7, 0x84, 0x88, 0x67, 0x57, 0x95, 0xA8, 0x59, 0x77, 0x68, 0x4A,
    0x49, 0x69, 0x57, 0x6A, 0x59, 0x58, 0x67, 0x87, 0x5A, 0x75, 0x78, 0x69,
    0x56, 0x97, 0x77, 0x73, 0x08, 0x78, 0x78, 0x77, 0x87, 0x78, 0x77, 0x78,
    0x77, 0x77, 0x87, 0x78, 0x68, 0x77, 0x77, 0x87, 0x78, 0x76, 0x86, 0x97,
    0x58, 0x77, 0x78, 0x58, 0x78, 0x77, 0x68, 0x78, 0x75, 0x95, 0xB7, 0x70,
    0x8F, 0x80, 0xA6, 0x87, 0x65, 0x66, 0x78, 0x7A, 0x17, 0x77, 0x70,
];
