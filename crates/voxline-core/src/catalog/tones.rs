//! Built-in line tables.
//!
//! Static configuration, not behavior: five personality tones, each with
//! short spoken lines per lifecycle event. Lines stay brief enough that a
//! synthesized clip lands under a couple of seconds.

type EventLines = (&'static str, &'static [&'static str]);
type Tone = (&'static str, &'static [EventLines]);

pub(super) const BUILTIN: &[Tone] = &[
    ("sarcastic", SARCASTIC),
    ("grumpy", GRUMPY),
    ("enthusiastic", ENTHUSIASTIC),
    ("informational", INFORMATIONAL),
    ("dramatic", DRAMATIC),
];

const SARCASTIC: &[EventLines] = &[
    (
        "Stop",
        &[
            "Done. You're welcome.",
            "Finished. Hold applause.",
            "There. Happy now?",
            "Done. That was exhausting.",
            "Masterpiece delivered.",
            "Finally. Took long enough.",
        ],
    ),
    (
        "SessionStart",
        &[
            "Oh great, you again.",
            "Back for more?",
            "Let me guess. Work.",
            "Reporting for duty.",
        ],
    ),
    (
        "SessionEnd",
        &[
            "Finally, freedom!",
            "Goodbye forever. Maybe.",
            "Session over. Bye.",
        ],
    ),
    (
        "PostToolUseFailure",
        &[
            "Broke. Shocking.",
            "Not my fault.",
            "Well that failed.",
            "Broken. Classic.",
        ],
    ),
    (
        "PermissionRequest",
        &[
            "Permission. Now, boss.",
            "Approve me. Chop chop.",
            "Need permission here!",
        ],
    ),
    (
        "Notification",
        &["Pay attention!", "Psst! Over here!", "News flash!"],
    ),
    ("SubagentStart", &["Deploying minion!", "Sending backup."]),
    (
        "SubagentStop",
        &["Minion survived. Somehow.", "Report from the field!"],
    ),
    ("TaskCompleted", &["Done. I'm a hero.", "Where's my medal?"]),
    (
        "PreCompact",
        &["Memory full. Forgetting.", "Brain shrinking. Your fault."],
    ),
    (
        "UserPromptSubmit",
        &["Another brilliant idea.", "What now, boss?"],
    ),
    ("PreToolUse", &["Watch and learn.", "Exciting stuff."]),
    ("PostToolUse", &["Nailed it.", "Obviously worked."]),
    ("TeammateIdle", &["Someone's slacking.", "Hello? Anyone?"]),
];

const GRUMPY: &[EventLines] = &[
    (
        "Stop",
        &[
            "Done. Go away.",
            "Finished. Ugh.",
            "It's done. Stop asking.",
            "Finally done.",
            "Leave me alone.",
        ],
    ),
    (
        "SessionStart",
        &[
            "What now?",
            "Not you again.",
            "Ugh. Fine.",
            "This better be important.",
        ],
    ),
    (
        "SessionEnd",
        &["Good riddance.", "About time.", "Finally. Peace."],
    ),
    (
        "PostToolUseFailure",
        &[
            "Broken. Great.",
            "Failed. Not surprised.",
            "Error. Blame yourself.",
        ],
    ),
    (
        "PermissionRequest",
        &[
            "Permission. Hurry up.",
            "Waiting. Impatiently.",
            "Approve this already!",
        ],
    ),
    (
        "Notification",
        &[
            "What is it now?",
            "Ugh, notification.",
            "Something happened. Joy.",
        ],
    ),
    (
        "SubagentStart",
        &["Off you go, minion.", "Sending another victim."],
    ),
    ("SubagentStop", &["Minion's back.", "Report. Be quick."]),
    (
        "TaskCompleted",
        &["Task done. Whatever.", "Completed. Big deal."],
    ),
    (
        "PreCompact",
        &["Memory full. Typical.", "Forgetting stuff. Not sorry."],
    ),
    ("UserPromptSubmit", &["What now?", "Here we go again."]),
    ("PreToolUse", &["Fine, I'll do it.", "Don't rush me."]),
    ("PostToolUse", &["There. Happy?", "Done. Next."]),
    (
        "TeammateIdle",
        &["Someone stopped. Smart.", "Can't blame them."],
    ),
];

const ENTHUSIASTIC: &[EventLines] = &[
    (
        "Stop",
        &[
            "All done! Amazing!",
            "Finished! High five!",
            "Let's do another!",
            "WOOHOO! Done!",
            "Nailed it! Yay!",
        ],
    ),
    (
        "SessionStart",
        &[
            "New session! Let's go!",
            "HELLO! So ready!",
            "Best day ever!",
        ],
    ),
    (
        "SessionEnd",
        &["That was fun!", "Come back soon!", "Until next time!"],
    ),
    (
        "PostToolUseFailure",
        &[
            "Oopsie! We got this!",
            "Error! A challenge!",
            "We'll fix it!",
        ],
    ),
    (
        "PermissionRequest",
        &[
            "Can I? Pretty please?",
            "Approve me! Yay!",
            "Quick quick! Approve!",
        ],
    ),
    (
        "Notification",
        &["Exciting news!", "How thrilling!", "Love notifications!"],
    ),
    ("SubagentStart", &["Teamwork! Go buddy!", "Minion deployed!"]),
    ("SubagentStop", &["Buddy's back! Yay!", "Helper returned!"]),
    ("TaskCompleted", &["We're heroes!", "Victory! Celebrate!"]),
    ("PreCompact", &["Spring cleaning time!", "Making room!"]),
    ("UserPromptSubmit", &["Ooh what's this?!", "New prompt! Yay!"]),
    ("PreToolUse", &["Tool time! Favorite!", "Watch this!"]),
    ("PostToolUse", &["YES! Worked!", "Beautiful!"]),
    ("TeammateIdle", &["Wake up buddy!", "Taking a break!"]),
];

const INFORMATIONAL: &[EventLines] = &[
    (
        "Stop",
        &[
            "Response complete.",
            "Processing finished.",
            "Task complete.",
            "Done. Ready.",
        ],
    ),
    (
        "SessionStart",
        &["Session initialized.", "Ready.", "Online."],
    ),
    ("SessionEnd", &["Session terminated.", "Shutting down."]),
    (
        "PostToolUseFailure",
        &[
            "Tool failed.",
            "Error encountered.",
            "Operation unsuccessful.",
        ],
    ),
    (
        "PermissionRequest",
        &[
            "Awaiting approval.",
            "Authorization needed.",
            "Confirm to proceed.",
        ],
    ),
    ("Notification", &["New notification.", "Alert."]),
    ("SubagentStart", &["Subagent deployed.", "Process started."]),
    ("SubagentStop", &["Subagent completed.", "Process finished."]),
    ("TaskCompleted", &["Task complete.", "Objective achieved."]),
    ("PreCompact", &["Compaction starting.", "Optimizing memory."]),
    ("UserPromptSubmit", &["Input received.", "Processing."]),
    ("PreToolUse", &["Executing tool.", "In progress."]),
    ("PostToolUse", &["Tool succeeded.", "Operation complete."]),
    ("TeammateIdle", &["Member idle.", "Agent waiting."]),
];

const DRAMATIC: &[EventLines] = &[
    (
        "Stop",
        &[
            "The quest is complete!",
            "Victory is ours!",
            "Behold! It is finished!",
            "Let the horns sound!",
            "Glory! It is done!",
        ],
    ),
    (
        "SessionStart",
        &[
            "A new chapter begins!",
            "The saga continues!",
            "Rise! Adventure awaits!",
        ],
    ),
    ("SessionEnd", &["The tale ends.", "Farewell, brave one."]),
    (
        "PostToolUseFailure",
        &[
            "Disaster! It has fallen!",
            "Dark times! An error!",
            "We shall not yield!",
        ],
    ),
    (
        "PermissionRequest",
        &[
            "Your blessing, my liege!",
            "Grant me passage!",
            "Destiny awaits your word!",
        ],
    ),
    (
        "Notification",
        &["Hear ye! Hear ye!", "Tidings from the realm!"],
    ),
    (
        "SubagentStart",
        &["Send forth the scouts!", "Reinforcements! Onward!"],
    ),
    (
        "SubagentStop",
        &["The scout returns!", "Our champion returns!"],
    ),
    ("TaskCompleted", &["Glorious victory!", "The quest is won!"]),
    ("PreCompact", &["Scrolls grow heavy.", "A purge awaits."]),
    (
        "UserPromptSubmit",
        &["A new quest appears!", "The oracle speaks!"],
    ),
    ("PreToolUse", &["Into battle!", "Unsheathing tools!"]),
    ("PostToolUse", &["Strike lands true!", "Masterful execution!"]),
    ("TeammateIdle", &["A warrior rests.", "One stands idle."]),
];
