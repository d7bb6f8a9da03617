/*!
# Introductory Tutorial for bfsim

The machine has a tape of byte cells and a pointer to one of them.
The tape starts as a single cell holding zero. Every cell holds a
value from 0 to 255. Adding one to 255 gives 0 and taking one from
0 gives 255.

A program is a string. Eight characters do something, `^` stops to
show you the machine, and everything else is ignored. You can write
as many comments as you like between instructions.

<pre><code>&nbsp;$ bfsim '+++ add three . and print it'
</code></pre>

That prints the character with code point 3, which your terminal
probably won't show. Add more to get something visible. There are
65 `+` in the next one.

<pre><code>&nbsp;$ bfsim '+++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++++.'
&nbsp;A
</code></pre>

Typing that is tedious. Loops do the work for you. `[` and `]`
repeat the instructions between them for as long as the current
cell is not zero. Here we count the first cell down from 8 and add
8 to the second cell each time around, then add one more.

<pre><code>&nbsp;$ bfsim '++++++++[>++++++++<-]>+.'
&nbsp;A
</code></pre>

If you leave off the program, bfsim asks for it.

<pre><code>&nbsp;$ bfsim
&nbsp;Brainfuck Code:,.
&nbsp;Input one character:z
&nbsp;z
</code></pre>

Longer programs are easier to keep in a file.

<pre><code>&nbsp;$ bfsim --file hello.b
</code></pre>

Stop a running program with CTRL-C.

*/
