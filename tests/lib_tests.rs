use lectern::cache::{CacheEntry, DirCache, dir_mtime_ns};
use lectern::classify::{ExtensionPolicy, classify, split_file_name};
use lectern::sort::{natural_cmp, sort_catalog};
use lectern::types::{Course, FileEntry, Topic};
use std::cmp::Ordering;

fn file(file_name: &str) -> FileEntry {
    let (name, ext) = split_file_name(file_name);
    FileEntry {
        file_name: file_name.to_string(),
        name,
        ext,
    }
}

// --- split_file_name ---

#[test]
fn test_split_basic() {
    assert_eq!(
        split_file_name("Lesson 1.mp4"),
        ("Lesson 1".to_string(), ".mp4".to_string())
    );
}

#[test]
fn test_split_lowercases_extension() {
    assert_eq!(
        split_file_name("VIDEO.MP4"),
        ("VIDEO".to_string(), ".mp4".to_string())
    );
}

#[test]
fn test_split_no_extension() {
    assert_eq!(
        split_file_name("README"),
        ("README".to_string(), String::new())
    );
}

#[test]
fn test_split_multiple_dots() {
    assert_eq!(
        split_file_name("intro.part1.mkv"),
        ("intro.part1".to_string(), ".mkv".to_string())
    );
}

#[test]
fn test_split_leading_dot_is_not_an_extension() {
    assert_eq!(
        split_file_name(".DS_Store"),
        (".DS_Store".to_string(), String::new())
    );
}

// --- classify ---

#[test]
fn test_allow_list_admits_video_extensions() {
    for name in ["a.mp4", "b.MKV", "c.ts", "d.3gp", "e.webm"] {
        assert!(
            classify(name, ExtensionPolicy::VideoAllowList).is_some(),
            "{name} should classify"
        );
    }
}

#[test]
fn test_allow_list_rejects_non_video() {
    for name in ["a.srt", "b.txt", "c.url", "README", ".DS_Store"] {
        assert!(
            classify(name, ExtensionPolicy::VideoAllowList).is_none(),
            "{name} should be dropped"
        );
    }
}

#[test]
fn test_deny_list_keeps_subtitles() {
    let entry = classify("video.srt", ExtensionPolicy::LegacyJunkDenyList).unwrap();
    assert_eq!(entry.ext, ".srt");
}

#[test]
fn test_deny_list_rejects_junk() {
    for name in ["shortcut.url", "README", ".DS_Store"] {
        assert!(
            classify(name, ExtensionPolicy::LegacyJunkDenyList).is_none(),
            "{name} should be dropped"
        );
    }
}

#[test]
fn test_classified_entry_fields() {
    let entry = classify("01 Intro.MP4", ExtensionPolicy::VideoAllowList).unwrap();
    assert_eq!(entry.file_name, "01 Intro.MP4");
    assert_eq!(entry.name, "01 Intro");
    assert_eq!(entry.ext, ".mp4");
}

// --- natural_cmp ---

#[test]
fn test_natural_cmp_zero_padded_numbers() {
    assert_eq!(natural_cmp("01 Video.mp4", "02 Video.mp4"), Ordering::Less);
}

#[test]
fn test_natural_cmp_numeric_before_lexicographic() {
    assert_eq!(natural_cmp("2. Basics", "10. Advanced"), Ordering::Less);
    assert_eq!(natural_cmp("10. Advanced", "2. Basics"), Ordering::Greater);
}

#[test]
fn test_natural_cmp_case_insensitive() {
    assert_eq!(natural_cmp("alpha", "Beta"), Ordering::Less);
    assert_eq!(natural_cmp("Beta", "alpha"), Ordering::Greater);
}

#[test]
fn test_natural_cmp_equal() {
    assert_eq!(natural_cmp("Topic 3", "Topic 3"), Ordering::Equal);
}

#[test]
fn test_natural_cmp_prefix_is_less() {
    assert_eq!(natural_cmp("Intro", "Introduction"), Ordering::Less);
}

#[test]
fn test_natural_cmp_plain_strings() {
    assert_eq!(natural_cmp("apple", "banana"), Ordering::Less);
}

// --- sort_catalog ---

#[test]
fn test_sort_catalog_topics_and_files() {
    let mut courses = vec![Course {
        name: "C".to_string(),
        topics: vec![
            Topic {
                name: "10. Advanced".to_string(),
                files: vec![file("02 b.mp4"), file("01 a.mp4"), file("10 c.mp4")],
                is_topic_less: false,
            },
            Topic {
                name: "2. Basics".to_string(),
                files: vec![],
                is_topic_less: false,
            },
        ],
    }];
    sort_catalog(&mut courses);

    let names: Vec<&str> = courses[0].topics.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["2. Basics", "10. Advanced"]);
    let files: Vec<&str> = courses[0].topics[0]
        .files
        .iter()
        .map(|f| f.file_name.as_str())
        .collect();
    assert_eq!(files, ["01 a.mp4", "02 b.mp4", "10 c.mp4"]);
}

// --- DirCache ---

#[test]
fn test_cache_get_absent() {
    let cache: DirCache<Vec<Topic>> = DirCache::new();
    assert!(cache.get(std::path::Path::new("/no/such/dir")).is_none());
}

#[test]
fn test_cache_put_get_roundtrip() {
    let cache: DirCache<Vec<String>> = DirCache::new();
    let path = std::path::Path::new("/some/dir");
    cache.put(path, 42, vec!["a".to_string()]);
    let entry = cache.get(path).unwrap();
    assert_eq!(entry.mtime_ns, 42);
    assert_eq!(entry.data, vec!["a".to_string()]);
}

#[test]
fn test_cache_get_fresh_requires_matching_mtime() {
    let cache: DirCache<u32> = DirCache::new();
    let path = std::path::Path::new("/some/dir");
    cache.put(path, 100, 7);
    assert_eq!(cache.get_fresh(path, 100), Some(7));
    assert_eq!(cache.get_fresh(path, 101), None);
}

#[test]
fn test_cache_is_valid_against_real_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let mtime = dir_mtime_ns(dir.path()).unwrap();
    let cache: DirCache<u32> = DirCache::new();
    cache.put(dir.path(), mtime, 1);

    let entry = cache.get(dir.path()).unwrap();
    assert!(cache.is_valid(dir.path(), &entry));

    let stale = CacheEntry {
        mtime_ns: mtime + 1,
        data: 1,
    };
    assert!(!cache.is_valid(dir.path(), &stale));
}

#[test]
fn test_cache_is_valid_vanished_directory() {
    let cache: DirCache<u32> = DirCache::new();
    let entry = CacheEntry {
        mtime_ns: 1,
        data: 1,
    };
    assert!(!cache.is_valid(std::path::Path::new("/no/such/dir"), &entry));
}

#[test]
fn test_cache_clear() {
    let cache: DirCache<u32> = DirCache::new();
    cache.put(std::path::Path::new("/a"), 1, 1);
    cache.put(std::path::Path::new("/b"), 2, 2);
    assert_eq!(cache.len(), 2);
    cache.clear();
    assert!(cache.is_empty());
}

// --- catalog JSON shape ---

#[test]
fn test_catalog_serializes_camel_case() {
    let course = Course {
        name: "Course1".to_string(),
        topics: vec![Topic {
            name: "Topic1".to_string(),
            files: vec![file("video.mp4")],
            is_topic_less: false,
        }],
    };
    let value = serde_json::to_value(&course).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Course1",
            "topics": [{
                "name": "Topic1",
                "files": [{"fileName": "video.mp4", "name": "video", "ext": ".mp4"}],
            }],
        })
    );
}

#[test]
fn test_topicless_flag_serialized_only_when_set() {
    let topic = Topic {
        name: "Solo".to_string(),
        files: vec![],
        is_topic_less: true,
    };
    let value = serde_json::to_value(&topic).unwrap();
    assert_eq!(value["isTopicLess"], serde_json::json!(true));

    let regular = Topic {
        name: "Solo".to_string(),
        files: vec![],
        is_topic_less: false,
    };
    let value = serde_json::to_value(&regular).unwrap();
    assert!(value.get("isTopicLess").is_none());
}
